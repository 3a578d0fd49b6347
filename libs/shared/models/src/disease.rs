use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::EntityId;

pub const DEFAULT_CONDITION: &str = "General Health Issue";
pub const DEFAULT_SEVERITY: &str = "medium";

/// Outcome of matching a symptom key against the symptom table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionMatch {
    pub condition: String,
    pub severity: String,
    pub doctors: Vec<EntityId>,
}

impl ConditionMatch {
    pub fn new(condition: &str, severity: &str, doctors: &[EntityId]) -> Self {
        Self {
            condition: condition.to_string(),
            severity: severity.to_string(),
            doctors: doctors.to_vec(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.condition == DEFAULT_CONDITION
    }
}

/// Kept for every analysis request; nothing reads these back yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomRecord {
    pub id: EntityId,
    pub symptoms: Vec<String>,
    pub analysis: ConditionMatch,
    pub created_at: DateTime<Utc>,
}
