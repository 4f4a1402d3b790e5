use axum::extract::{Path, State};
use axum::{Extension, Json};
use uuid::Uuid;

use shepherd_audit::events::AuditEvent;
use shepherd_core::models::assessment::AssessmentData;
use shepherd_core::models::care_plan::{CarePlan, PlanStatus};
use shepherd_core::s3_keys;
use shepherd_plan::generator;
use shepherd_storage::{plans, records};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Submit a completed assessment: generate the recommendation plan and
/// activate it as the caller's single active care plan.
pub async fn create_care_plan(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(assessment): Json<AssessmentData>,
) -> Result<Json<CarePlan>, ApiError> {
    let user_id = user.user_id()?;
    assessment.validate()?;

    let generated = generator::generate(&assessment);
    let now = jiff::Timestamp::now();
    let plan = CarePlan {
        id: Uuid::new_v4(),
        user_id,
        assessment_data: assessment,
        recommendations: generated.recommendations,
        priority_level: generated.priority,
        status: PlanStatus::Active,
        created_at: now,
        updated_at: now,
    };

    plans::activate_plan(&state.s3, &state.bucket, &plan).await?;

    AuditEvent::new("care_plan.activate", "care_plan", plan.id.to_string(), &user.sub).emit();

    Ok(Json(plan))
}

pub async fn list_care_plans(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<CarePlan>>, ApiError> {
    let user_id = user.user_id()?;
    let mut plans = plans::load_user_plans(&state.s3, &state.bucket, user_id).await?;
    plans.sort_by_key(|p| std::cmp::Reverse(p.created_at));
    Ok(Json(plans))
}

pub async fn get_active_plan(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<CarePlan>, ApiError> {
    let user_id = user.user_id()?;
    let plan = plans::find_active_plan(&state.s3, &state.bucket, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("no active care plan".to_string()))?;
    Ok(Json(plan))
}

pub async fn archive_care_plan(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<CarePlan>, ApiError> {
    let user_id = user.user_id()?;
    let key = s3_keys::care_plan(user_id, id);

    let (mut plan, etag): (CarePlan, String) =
        records::load_record(&state.s3, &state.bucket, &key).await?;
    plan.status = PlanStatus::Archived;
    plan.updated_at = jiff::Timestamp::now();
    records::save_record_if_match(&state.s3, &state.bucket, &key, &plan, &etag).await?;

    AuditEvent::new("care_plan.archive", "care_plan", plan.id.to_string(), &user.sub).emit();

    Ok(Json(plan))
}
