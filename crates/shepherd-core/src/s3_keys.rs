//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of objects in the Shepherd S3 bucket.

use uuid::Uuid;

pub fn profile(id: Uuid) -> String {
    format!("profiles/{id}.json")
}

pub fn provider(id: Uuid) -> String {
    format!("providers/{id}.json")
}

pub const PROVIDERS_PREFIX: &str = "providers/";

pub fn care_plan(user_id: Uuid, id: Uuid) -> String {
    format!("care_plans/{user_id}/{id}.json")
}

pub fn user_plans_prefix(user_id: Uuid) -> String {
    format!("care_plans/{user_id}/")
}

pub fn review(provider_id: Uuid, id: Uuid) -> String {
    format!("reviews/{provider_id}/{id}.json")
}

pub fn provider_reviews_prefix(provider_id: Uuid) -> String {
    format!("reviews/{provider_id}/")
}

pub const INDEX: &str = "_index/tantivy.tar.zst";
