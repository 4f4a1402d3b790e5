//! shepherd-search
//!
//! The provider-directory search index. A Tantivy index over all
//! provider records, stored in S3 as a tar.zst blob with ETag optimistic
//! locking, supporting full-text search and structured directory
//! filters.

pub mod error;
pub mod flush;
pub mod index;
pub mod mutate;
pub mod query;
