use std::cmp::Ordering;

use axum::extract::State;
use axum::{Extension, Json};

use shepherd_plan::scorer::{self, ProviderMatch};
use shepherd_storage::{plans, providers};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Score the provider directory against the caller's active care plan
/// and return the ranked matches.
pub async fn recommended_providers(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<ProviderMatch>>, ApiError> {
    let user_id = user.user_id()?;
    let plan = plans::find_active_plan(&state.s3, &state.bucket, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("no active care plan".to_string()))?;

    let mut candidates = providers::load_providers(&state.s3, &state.bucket).await?;
    // Only open practices are recommended. Candidates go in rating
    // order; equal scores inherit it through the stable sort.
    candidates.retain(|p| p.accepting_new_clients);
    candidates.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(Ordering::Equal)
    });

    let matches = scorer::score(&plan.assessment_data, &candidates);
    Ok(Json(matches))
}
