use axum::{extract::State, Json};

use shared_database::AppState;

use crate::models::{DoctorListResponse, SpecialtyListResponse};
use crate::services::DirectoryService;

pub async fn list_doctors(State(state): State<AppState>) -> Json<DoctorListResponse> {
    Json(DoctorListResponse {
        success: true,
        doctors: DirectoryService::new(&state).list_doctors(),
    })
}

pub async fn list_specialties(State(state): State<AppState>) -> Json<SpecialtyListResponse> {
    Json(SpecialtyListResponse {
        success: true,
        specialties: DirectoryService::new(&state).list_specialties(),
    })
}
