use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Where a provider sees clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum LocationType {
    InPerson,
    Virtual,
    Both,
}

impl LocationType {
    /// The wire/index value, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            LocationType::InPerson => "in-person",
            LocationType::Virtual => "virtual",
            LocationType::Both => "both",
        }
    }
}

/// A care-provider directory record. Read-only input to the match scorer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Provider {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub credentials: Option<String>,
    pub specialties: Vec<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub email: String,
    pub website: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub insurance_accepted: Vec<String>,
    pub accepting_new_clients: bool,
    pub languages: Vec<String>,
    pub rating: f64,
    pub review_count: u32,
    pub location_type: LocationType,
    pub location_details: Option<String>,
    pub gloo_scholarship_available: bool,
    pub service_durations: Vec<String>,
    pub content_resources: bool,
    pub content_resources_list: Vec<String>,
    pub denominations: Vec<String>,
    pub retreat_facilitated: bool,
    pub actual_therapists: bool,
    pub general_relational_support: Vec<String>,
    pub benevolence_request: bool,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Provider {
    /// Whether the provider offers faith-based care at all.
    pub fn faith_based(&self) -> bool {
        !self.denominations.is_empty()
    }

    /// Validate an incoming provider record before it is persisted.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(CoreError::OutOfRange {
                field: "rating",
                value: self.rating.to_string(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(CoreError::MissingField("name".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(CoreError::MissingField("email".to_string()));
        }
        Ok(())
    }
}
