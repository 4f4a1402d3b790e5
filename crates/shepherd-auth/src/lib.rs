//! shepherd-auth
//!
//! Cognito JWT validation. Sign-up, sign-in, and session issuance happen
//! in the hosted user pool; this crate only verifies the tokens it mints
//! and extracts a user identity from them.

pub mod error;
pub mod jwt;
