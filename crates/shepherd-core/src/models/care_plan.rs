use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::assessment::AssessmentData;
use crate::models::recommendation::RecommendationPlan;

/// Overall urgency of a care plan, derived from self-reported stress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PriorityLevel {
    Low,
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PlanStatus {
    Draft,
    Active,
    Completed,
    Archived,
}

/// A persisted bundle of assessment answers, generated recommendations,
/// and a priority level for one user.
///
/// At most one plan per user carries `status = Active`; the storage layer
/// archives any prior active plan when a new one is activated.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CarePlan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub assessment_data: AssessmentData,
    pub recommendations: RecommendationPlan,
    pub priority_level: PriorityLevel,
    pub status: PlanStatus,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
