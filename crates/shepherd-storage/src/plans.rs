use aws_sdk_s3::Client;
use tracing::info;
use uuid::Uuid;

use shepherd_core::models::care_plan::{CarePlan, PlanStatus};
use shepherd_core::s3_keys;

use crate::error::StorageError;
use crate::{objects, records};

/// Load every care plan stored for a user.
pub async fn load_user_plans(
    client: &Client,
    bucket: &str,
    user_id: Uuid,
) -> Result<Vec<CarePlan>, StorageError> {
    let prefix = s3_keys::user_plans_prefix(user_id);
    let keys = objects::list_objects(client, bucket, &prefix).await?;

    let mut plans = Vec::new();
    for key in &keys {
        let (plan, _etag): (CarePlan, String) = records::load_record(client, bucket, key).await?;
        plans.push(plan);
    }
    Ok(plans)
}

/// Find the user's active care plan: most recent by creation time among
/// plans with `status = Active`.
pub async fn find_active_plan(
    client: &Client,
    bucket: &str,
    user_id: Uuid,
) -> Result<Option<CarePlan>, StorageError> {
    let mut plans = load_user_plans(client, bucket, user_id).await?;
    plans.retain(|p| p.status == PlanStatus::Active);
    plans.sort_by_key(|p| p.created_at);
    Ok(plans.pop())
}

/// Persist a new care plan as the user's single active plan.
///
/// Any plan currently active for the user is archived first (with an
/// If-Match write, so a concurrent activation surfaces as
/// `PreconditionFailed` instead of silently leaving two active plans),
/// then the new plan is written. Invariant afterwards: at most one plan
/// per user has `status = Active`.
pub async fn activate_plan(
    client: &Client,
    bucket: &str,
    plan: &CarePlan,
) -> Result<String, StorageError> {
    let prefix = s3_keys::user_plans_prefix(plan.user_id);
    let keys = objects::list_objects(client, bucket, &prefix).await?;

    for key in &keys {
        let (mut existing, etag): (CarePlan, String) =
            records::load_record(client, bucket, key).await?;
        if existing.status == PlanStatus::Active {
            existing.status = PlanStatus::Archived;
            existing.updated_at = jiff::Timestamp::now();
            records::save_record_if_match(client, bucket, key, &existing, &etag).await?;
            info!(plan_id = %existing.id, user_id = %plan.user_id, "archived superseded care plan");
        }
    }

    let key = s3_keys::care_plan(plan.user_id, plan.id);
    let etag = records::save_record(client, bucket, &key, plan).await?;
    info!(plan_id = %plan.id, user_id = %plan.user_id, "activated care plan");
    Ok(etag)
}
