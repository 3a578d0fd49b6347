use axum::{extract::State, Json};
use tracing::instrument;

use shared_database::AppState;
use shared_models::error::AppError;
use shared_utils::extractor::ApiJson;
use shared_utils::validation::require_text;

use crate::models::{ComparePricesRequest, ComparePricesResponse};
use crate::services::PriceComparator;

#[instrument(skip_all)]
pub async fn compare_prices(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ComparePricesRequest>,
) -> Result<Json<ComparePricesResponse>, AppError> {
    let name = require_text(request.medicine_name, "medicineName")?;

    let medicine = PriceComparator::new(&state).compare(&name, request.strength)?;

    Ok(Json(ComparePricesResponse {
        success: true,
        medicine,
    }))
}
