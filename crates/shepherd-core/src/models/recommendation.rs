use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ItemPriority {
    Urgent,
    High,
    Medium,
    Low,
}

/// A single recommendation on a care plan.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecommendationItem {
    pub title: String,
    pub description: String,
    pub priority: Option<ItemPriority>,
    pub estimated_cost: Option<f64>,
}

impl RecommendationItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority: None,
            estimated_cost: None,
        }
    }

    pub fn with_priority(mut self, priority: ItemPriority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Generated recommendations, grouped by time horizon. Created once at
/// assessment submission and immutable thereafter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecommendationPlan {
    pub immediate: Vec<RecommendationItem>,
    pub short_term: Vec<RecommendationItem>,
    pub long_term: Vec<RecommendationItem>,
    pub resources: Vec<RecommendationItem>,
}
