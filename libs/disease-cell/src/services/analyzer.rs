use std::sync::Arc;

use tracing::{debug, info};

use doctor_cell::DirectoryService;
use shared_database::{AppState, MemoryStore};
use shared_models::disease::{ConditionMatch, DEFAULT_CONDITION, DEFAULT_SEVERITY};

use crate::models::{SymptomAnalysis, RECOMMENDATIONS};

/// Table lookup on the exact comma-joined symptom list. No scoring and no
/// fuzzy matching: anything not in the table gets the general fallback.
pub struct SymptomAnalyzer {
    store: Arc<MemoryStore>,
    directory: DirectoryService,
}

impl SymptomAnalyzer {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            directory: DirectoryService::new(state),
        }
    }

    pub fn symptom_key(symptoms: &[String]) -> String {
        symptoms.join(",")
    }

    pub fn match_symptoms(&self, symptoms: &[String], severity: Option<&str>) -> ConditionMatch {
        let key = Self::symptom_key(symptoms);

        match self.store.lookup_symptoms(&key) {
            Some(found) => {
                debug!("Symptom key '{}' matched {}", key, found.condition);
                found.clone()
            }
            None => {
                debug!("Symptom key '{}' not in table, using fallback", key);
                let severity = severity
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or(DEFAULT_SEVERITY);
                let all_doctors: Vec<_> = self.store.doctors().iter().map(|d| d.id).collect();
                ConditionMatch::new(DEFAULT_CONDITION, severity, &all_doctors)
            }
        }
    }

    /// Matches, records the request and resolves the suggested doctors.
    pub async fn analyze(&self, symptoms: Vec<String>, severity: Option<&str>) -> SymptomAnalysis {
        let matched = self.match_symptoms(&symptoms, severity);
        let record = self
            .store
            .insert_symptom_record(symptoms.clone(), matched.clone())
            .await;

        info!(
            "Symptom analysis {} -> {} ({})",
            record.id, matched.condition, matched.severity
        );

        SymptomAnalysis {
            symptoms,
            suggested_doctors: self.directory.resolve(&matched.doctors),
            possible_condition: matched.condition,
            severity: matched.severity,
            recommendations: RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
        }
    }
}
