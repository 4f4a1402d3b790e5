use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProviderReview {
    pub id: Uuid,
    pub provider_id: Uuid,
    pub user_id: Uuid,
    /// 1–5 stars.
    pub rating: u8,
    pub review_text: Option<String>,
    pub anonymous: bool,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl ProviderReview {
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(1..=5).contains(&self.rating) {
            return Err(CoreError::OutOfRange {
                field: "rating",
                value: self.rating.to_string(),
            });
        }
        Ok(())
    }
}
