use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// JWT validation middleware.
///
/// Extracts the `Authorization: Bearer <token>` header. When a JWKS
/// decoding key is configured, the token is validated against the
/// Cognito user pool and the verified subject becomes the caller
/// identity. Without a key (local development) the bearer value is
/// trusted as a bare subject.
///
/// On success, inserts [`AuthUser`] into request extensions for handlers
/// to use.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    if token.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let sub = match &state.decoding_key {
        Some(key) => {
            let claims =
                shepherd_auth::jwt::validate_token(token, key, &state.user_pool_id, &state.region)
                    .map_err(|e| {
                        tracing::warn!("rejected bearer token: {e}");
                        StatusCode::UNAUTHORIZED
                    })?;
            claims.sub
        }
        None => token.to_string(),
    };

    req.extensions_mut().insert(AuthUser { sub });

    Ok(next.run(req).await)
}

/// Authenticated user extracted from JWT claims.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub sub: String,
}

impl AuthUser {
    /// The Cognito subject doubles as the Shepherd user id.
    pub fn user_id(&self) -> Result<Uuid, ApiError> {
        self.sub
            .parse()
            .map_err(|_| ApiError::Unauthorized(format!("invalid subject: {}", self.sub)))
    }
}
