use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use shepherd_audit::events::AuditEvent;
use shepherd_core::models::provider::Provider;
use shepherd_core::models::review::ProviderReview;
use shepherd_core::s3_keys;
use shepherd_storage::{objects, records};

use crate::directory;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

async fn load_provider_reviews(
    state: &AppState,
    provider_id: Uuid,
) -> Result<Vec<ProviderReview>, ApiError> {
    let prefix = s3_keys::provider_reviews_prefix(provider_id);
    let keys = objects::list_objects(&state.s3, &state.bucket, &prefix).await?;

    let mut reviews = Vec::new();
    for key in &keys {
        let (review, _etag): (ProviderReview, String) =
            records::load_record(&state.s3, &state.bucket, key).await?;
        reviews.push(review);
    }
    Ok(reviews)
}

pub async fn list_reviews(
    State(state): State<AppState>,
    Path(provider_id): Path<Uuid>,
) -> Result<Json<Vec<ProviderReview>>, ApiError> {
    let reviews = load_provider_reviews(&state, provider_id).await?;
    Ok(Json(reviews))
}

#[derive(Debug, Deserialize)]
pub struct CreateReview {
    pub rating: u8,
    pub review_text: Option<String>,
    #[serde(default)]
    pub anonymous: bool,
}

/// Create a review and fold it into the provider's aggregate rating.
pub async fn create_review(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(provider_id): Path<Uuid>,
    Json(body): Json<CreateReview>,
) -> Result<Json<ProviderReview>, ApiError> {
    let user_id = user.user_id()?;
    let now = jiff::Timestamp::now();

    let review = ProviderReview {
        id: Uuid::new_v4(),
        provider_id,
        user_id,
        rating: body.rating,
        review_text: body.review_text,
        anonymous: body.anonymous,
        created_at: now,
        updated_at: now,
    };
    review.validate()?;

    let review_key = s3_keys::review(provider_id, review.id);
    records::save_record(&state.s3, &state.bucket, &review_key, &review).await?;

    // Recompute the provider's aggregate rating from all stored reviews.
    let provider_key = s3_keys::provider(provider_id);
    let (mut provider, etag): (Provider, String) =
        records::load_record(&state.s3, &state.bucket, &provider_key).await?;

    let reviews = load_provider_reviews(&state, provider_id).await?;
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    provider.review_count = reviews.len() as u32;
    provider.rating = f64::from(sum) / reviews.len() as f64;
    provider.updated_at = now;

    records::save_record_if_match(&state.s3, &state.bucket, &provider_key, &provider, &etag)
        .await?;
    directory::reindex_provider(&state, &provider).await?;

    AuditEvent::new("provider.review", "provider", provider_id.to_string(), &user.sub)
        .with_details(serde_json::json!({ "rating": body.rating }))
        .emit();

    Ok(Json(review))
}
