use axum::{
    http::{header::CONTENT_TYPE, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{self, TraceLayer};
use tracing::Level;

use appointment_cell::router::appointment_routes;
use auth_cell::router::auth_routes;
use disease_cell::router::disease_routes;
use doctor_cell::router::doctor_routes;
use medicine_cell::router::medicine_routes;
use monitoring_cell::router::create_monitoring_router;
use shared_database::AppState;
use shared_models::error::AppError;

pub fn create_router(state: AppState) -> Router {
    let public_dir = state.config.public_dir.clone();
    let index = public_dir.join("index.html");

    let api = Router::new()
        .nest("/auth", auth_routes(state.clone()))
        .nest("/disease", disease_routes(state.clone()))
        .nest("/doctors", doctor_routes(state.clone()))
        .nest("/medicine", medicine_routes(state.clone()))
        .nest("/appointments", appointment_routes(state.clone()))
        .merge(create_monitoring_router(state));

    Router::new()
        .nest("/api", api)
        .route_service("/", ServeFile::new(&index))
        .route_service("/index.html", ServeFile::new(&index))
        .nest_service("/css", ServeDir::new(public_dir.join("css")))
        .nest_service("/js", ServeDir::new(public_dir.join("js")))
        .fallback(not_found)
}

/// Full application: routes plus the CORS and tracing layers.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    create_router(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
}

async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
