//! shepherd-core
//!
//! Pure domain types, Tantivy schema, and S3 key conventions.
//! No AWS SDK dependency — this is the shared vocabulary of the Shepherd
//! system.

pub mod error;
pub mod models;
pub mod s3_keys;
pub mod schema;
