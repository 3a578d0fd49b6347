use serde::{Deserialize, Serialize};

use crate::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: EntityId,
    pub name: String,
    pub specialty: String,
    pub fee: u32,
}

impl Doctor {
    pub fn new(id: EntityId, name: &str, specialty: &str, fee: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            specialty: specialty.to_string(),
            fee,
        }
    }

    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialty.eq_ignore_ascii_case(specialty)
    }
}

/// A specialist category shown on the doctors page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specialty {
    pub name: String,
    pub icon: String,
    pub conditions: Vec<String>,
}

impl Specialty {
    pub fn new(name: &str, icon: &str, conditions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
            conditions: conditions.iter().map(|c| c.to_string()).collect(),
        }
    }
}
