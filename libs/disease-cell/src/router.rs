use axum::{routing::post, Router};

use shared_database::AppState;

use crate::handlers;

pub fn disease_routes(state: AppState) -> Router {
    Router::new()
        .route("/analyze-symptoms", post(handlers::analyze_symptoms))
        .with_state(state)
}
