use serde::{Deserialize, Serialize};
use serde_json::Value;

use shared_models::doctor::Doctor;

/// Advice attached to every analysis, whatever the symptoms.
pub const RECOMMENDATIONS: [&str; 4] = [
    "Rest and hydration",
    "Avoid stress",
    "Consult a doctor",
    "Take prescribed medicines",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSymptomsRequest {
    pub symptoms: Option<Vec<String>>,
    pub severity: Option<String>,
    /// Collected by the form, not used by the analysis.
    pub duration: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomAnalysis {
    pub symptoms: Vec<String>,
    pub possible_condition: String,
    pub severity: String,
    pub recommendations: Vec<String>,
    /// Same order as the matched entry; `None` where a doctor id is unknown.
    pub suggested_doctors: Vec<Option<Doctor>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSymptomsResponse {
    pub success: bool,
    pub analysis: SymptomAnalysis,
}
