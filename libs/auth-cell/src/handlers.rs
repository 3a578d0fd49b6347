use axum::{extract::State, http::StatusCode, Json};
use tracing::instrument;

use shared_database::AppState;
use shared_models::error::AppError;
use shared_utils::extractor::ApiJson;
use shared_utils::validation::require_text;

use crate::models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::services::AccountService;

#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let email = require_text(request.email, "email")?;
    let full_name = require_text(request.full_name, "fullName")?;

    let user = AccountService::new(&state).register(email, full_name).await;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            user,
            message: "Registration successful!".to_string(),
        }),
    ))
}

#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let email = require_text(request.email, "email")?;

    let (user, token) = AccountService::new(&state).login(&email).await?;

    Ok(Json(LoginResponse {
        success: true,
        user,
        token,
        message: "Login successful!".to_string(),
    }))
}
