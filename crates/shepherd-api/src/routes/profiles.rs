use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use shepherd_core::models::profile::Profile;
use shepherd_core::s3_keys;
use shepherd_storage::records;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Profile>, ApiError> {
    let key = s3_keys::profile(id);
    let (profile, _etag): (Profile, String) =
        records::load_record(&state.s3, &state.bucket, &key).await?;
    Ok(Json(profile))
}

pub async fn create_profile(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> Result<Json<Profile>, ApiError> {
    let key = s3_keys::profile(profile.id);
    records::save_record(&state.s3, &state.bucket, &key, &profile).await?;
    Ok(Json(profile))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut profile): Json<Profile>,
) -> Result<Json<Profile>, ApiError> {
    profile.id = id;
    let key = s3_keys::profile(id);
    records::save_record(&state.s3, &state.bucket, &key, &profile).await?;
    Ok(Json(profile))
}
