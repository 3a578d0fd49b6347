use serde::{Deserialize, Serialize};

use shared_models::doctor::{Doctor, Specialty};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorListResponse {
    pub success: bool,
    pub doctors: Vec<Doctor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialtyListResponse {
    pub success: bool,
    pub specialties: Vec<Specialty>,
}
