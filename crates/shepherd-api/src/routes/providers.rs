use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use shepherd_core::models::provider::Provider;
use shepherd_core::s3_keys;
use shepherd_search::query::{DirectoryFilter, DirectoryHit};
use shepherd_storage::{providers, records};

use crate::directory;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_providers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Provider>>, ApiError> {
    let providers = providers::load_providers(&state.s3, &state.bucket).await?;
    Ok(Json(providers))
}

pub async fn get_provider(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Provider>, ApiError> {
    let key = s3_keys::provider(id);
    let (provider, _etag): (Provider, String) =
        records::load_record(&state.s3, &state.bucket, &key).await?;
    Ok(Json(provider))
}

pub async fn create_provider(
    State(state): State<AppState>,
    Json(provider): Json<Provider>,
) -> Result<Json<Provider>, ApiError> {
    provider.validate()?;

    let key = s3_keys::provider(provider.id);
    records::save_record(&state.s3, &state.bucket, &key, &provider).await?;
    directory::reindex_provider(&state, &provider).await?;

    Ok(Json(provider))
}

pub async fn update_provider(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut provider): Json<Provider>,
) -> Result<Json<Provider>, ApiError> {
    provider.id = id;
    provider.validate()?;

    let key = s3_keys::provider(id);
    records::save_record(&state.s3, &state.bucket, &key, &provider).await?;
    directory::reindex_provider(&state, &provider).await?;

    Ok(Json(provider))
}

pub async fn delete_provider(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    let key = s3_keys::provider(id);
    shepherd_storage::objects::delete_object(&state.s3, &state.bucket, &key).await?;
    directory::deindex_provider(&state, id).await?;

    Ok(Json(()))
}

/// Query parameters for the directory search endpoint. `q` switches to
/// full-text mode; everything else is a structured filter.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub specialty: Option<String>,
    pub denomination: Option<String>,
    pub insurance: Option<String>,
    #[serde(default)]
    pub telehealth: bool,
    #[serde(default)]
    pub faith_based: bool,
    #[serde(default)]
    pub accepting: bool,
    pub limit: Option<usize>,
}

pub async fn search_providers(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<DirectoryHit>>, ApiError> {
    let limit = params.limit.unwrap_or(50).min(200);
    let loaded = state.index.lock().await;

    let hits = match &params.q {
        Some(q) if !q.trim().is_empty() => {
            shepherd_search::query::search(&loaded.index, q, limit)?
        }
        _ => {
            let filter = DirectoryFilter {
                specialty: params.specialty,
                denomination: params.denomination,
                insurance: params.insurance,
                location: None,
                telehealth_only: params.telehealth,
                faith_based_only: params.faith_based,
                accepting_only: params.accepting,
            };
            shepherd_search::query::filter_directory(&loaded.index, &filter, limit)?
        }
    };

    Ok(Json(hits))
}
