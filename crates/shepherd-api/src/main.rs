use std::env;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{delete, get, post, put};
use jsonwebtoken::DecodingKey;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod directory;
mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bucket = env::var("SHEPHERD_BUCKET").unwrap_or_else(|_| "shepherd".to_string());
    let user_pool_id =
        env::var("COGNITO_USER_POOL_ID").unwrap_or_else(|_| "us-east-1_placeholder".to_string());
    let region = env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());

    let decoding_key = match env::var("COGNITO_JWKS_PUBLIC_KEY_PEM") {
        Ok(pem) => Some(Arc::new(DecodingKey::from_rsa_pem(pem.as_bytes())?)),
        Err(_) => {
            tracing::warn!(
                "COGNITO_JWKS_PUBLIC_KEY_PEM not set; bearer tokens are trusted as bare subjects"
            );
            None
        }
    };

    let s3 = shepherd_storage::client::build_client().await;

    // Try to download the directory index; create empty if not found.
    let index_dir = Path::new("/tmp/tantivy");
    let loaded_index = match shepherd_search::index::download_index(&s3, &bucket, index_dir).await {
        Ok(idx) => idx,
        Err(shepherd_search::error::SearchError::IndexNotFound) => {
            tracing::info!("no existing directory index found, creating empty index");
            std::fs::create_dir_all(index_dir)?;
            let index = shepherd_search::index::create_empty_index(index_dir)?;
            shepherd_search::index::LoadedIndex {
                index,
                index_dir: index_dir.to_path_buf(),
                etag: String::new(),
            }
        }
        Err(e) => return Err(e.into()),
    };

    let state = AppState {
        s3,
        bucket,
        index: Arc::new(Mutex::new(loaded_index)),
        decoding_key,
        user_pool_id,
        region,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        // Provider directory
        .route("/providers", get(routes::providers::list_providers))
        .route("/providers", post(routes::providers::create_provider))
        .route("/providers/search", get(routes::providers::search_providers))
        .route("/providers/{id}", get(routes::providers::get_provider))
        .route("/providers/{id}", put(routes::providers::update_provider))
        .route("/providers/{id}", delete(routes::providers::delete_provider))
        .route(
            "/providers/{id}/reviews",
            get(routes::reviews::list_reviews),
        )
        .route(
            "/providers/{id}/reviews",
            post(routes::reviews::create_review),
        )
        // Care plans
        .route("/care-plans", get(routes::care_plans::list_care_plans))
        .route("/care-plans", post(routes::care_plans::create_care_plan))
        .route("/care-plans/active", get(routes::care_plans::get_active_plan))
        .route(
            "/care-plans/active/matches",
            get(routes::matches::recommended_providers),
        )
        .route(
            "/care-plans/{id}/archive",
            post(routes::care_plans::archive_care_plan),
        )
        // Profiles
        .route("/profiles", post(routes::profiles::create_profile))
        .route("/profiles/{id}", get(routes::profiles::get_profile))
        .route("/profiles/{id}", put(routes::profiles::update_profile))
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    let app = Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        .merge(protected)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state);

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
