use axum::{routing::post, Router};

use shared_database::AppState;

use crate::handlers;

pub fn medicine_routes(state: AppState) -> Router {
    Router::new()
        .route("/compare-prices", post(handlers::compare_prices))
        .with_state(state)
}
