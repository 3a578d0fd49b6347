use axum::{extract::State, Json};
use tracing::instrument;

use shared_database::AppState;
use shared_models::error::AppError;
use shared_utils::extractor::ApiJson;
use shared_utils::validation::require;

use crate::models::{AnalyzeSymptomsRequest, AnalyzeSymptomsResponse};
use crate::services::SymptomAnalyzer;

#[instrument(skip_all)]
pub async fn analyze_symptoms(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AnalyzeSymptomsRequest>,
) -> Result<Json<AnalyzeSymptomsResponse>, AppError> {
    let symptoms = require(request.symptoms, "symptoms")?;

    let analysis = SymptomAnalyzer::new(&state)
        .analyze(symptoms, request.severity.as_deref())
        .await;

    Ok(Json(AnalyzeSymptomsResponse {
        success: true,
        analysis,
    }))
}
