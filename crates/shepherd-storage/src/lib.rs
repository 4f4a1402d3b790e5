//! shepherd-storage
//!
//! S3 persistence for Shepherd records. Thin wrapper around the AWS S3
//! SDK, plus the care-plan activation discipline.

pub mod client;
pub mod error;
pub mod objects;
pub mod plans;
pub mod providers;
pub mod records;
