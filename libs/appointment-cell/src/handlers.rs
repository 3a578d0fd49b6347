use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;

use shared_database::AppState;
use shared_models::error::AppError;
use shared_utils::extractor::ApiJson;
use shared_utils::validation::require;

use crate::models::{
    AppointmentListQuery, AppointmentListResponse, BookAppointmentRequest, BookAppointmentResponse,
};
use crate::services::BookingService;

#[instrument(skip_all)]
pub async fn book_appointment(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<BookAppointmentResponse>), AppError> {
    let appointment = BookingService::new(&state).book(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookAppointmentResponse {
            success: true,
            appointment,
            message: "Appointment booked successfully!".to_string(),
        }),
    ))
}

#[instrument(skip_all)]
pub async fn list_appointments(
    State(state): State<AppState>,
    query: Result<Query<AppointmentListQuery>, QueryRejection>,
) -> Result<Json<AppointmentListResponse>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let user_id = require(query.user_id, "userId")?;

    let appointments = BookingService::new(&state).list_for_user(user_id).await;

    Ok(Json(AppointmentListResponse {
        success: true,
        appointments,
    }))
}
