use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use jsonwebtoken::DecodingKey;
use tokio::sync::Mutex;

use shepherd_search::index::LoadedIndex;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub s3: S3Client,
    pub bucket: String,
    pub index: Arc<Mutex<LoadedIndex>>,
    /// JWKS public key for JWT validation. When absent (local
    /// development), bearer tokens are trusted as bare subjects.
    pub decoding_key: Option<Arc<DecodingKey>>,
    pub user_pool_id: String,
    pub region: String,
}
