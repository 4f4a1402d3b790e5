use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;
use uuid::Uuid;

use shepherd_core::models::profile::Role;

use crate::error::AuthError;

/// Claims extracted from a Cognito JWT.
#[derive(Debug, Deserialize)]
pub struct IdentityClaims {
    pub sub: String,
    pub iss: String,
    pub token_use: String,
    pub exp: u64,
    pub iat: u64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "cognito:groups")]
    pub groups: Vec<String>,
}

impl IdentityClaims {
    /// The Cognito subject doubles as the Shepherd user id.
    pub fn user_id(&self) -> Result<Uuid, AuthError> {
        self.sub
            .parse()
            .map_err(|_| AuthError::InvalidSubject(self.sub.clone()))
    }

    /// Map Cognito group membership onto the application role.
    /// Everyone is a ministry leader unless placed in a staff group.
    pub fn role(&self) -> Role {
        if self.groups.iter().any(|g| g == "admins") {
            Role::Admin
        } else if self.groups.iter().any(|g| g == "providers") {
            Role::Provider
        } else {
            Role::Leader
        }
    }
}

/// Validate a Cognito JWT against the user pool's issuer and a
/// pre-fetched JWKS public key.
pub fn validate_token(
    token: &str,
    decoding_key: &DecodingKey,
    user_pool_id: &str,
    region: &str,
) -> Result<IdentityClaims, AuthError> {
    let issuer = format!("https://cognito-idp.{region}.amazonaws.com/{user_pool_id}");

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_issuer(&[&issuer]);
    validation.validate_exp = true;

    let token_data = decode::<IdentityClaims>(token, decoding_key, &validation)?;

    let token_use = &token_data.claims.token_use;
    if token_use != "access" && token_use != "id" {
        return Err(AuthError::InvalidToken(format!(
            "unexpected token_use: {token_use}"
        )));
    }

    Ok(token_data.claims)
}
