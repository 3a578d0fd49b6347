use axum::{extract::State, Json};

use shared_database::AppState;

use crate::models::HealthCheckResponse;
use crate::services::HealthMonitorService;

pub async fn get_health_status(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthMonitorService::new(state.config.clone()).check())
}
