pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use axum::http::{header, Method};
use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use service_core::config::Config;
use service_core::middleware::tracing::request_id_middleware;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::services::AppointmentRegistry;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub registry: AppointmentRegistry,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::service_info).post(handlers::receive_webhook),
        )
        .route(
            "/webhook",
            get(handlers::webhook_info).post(handlers::receive_webhook),
        )
        .route("/health", get(handlers::health_check))
        .with_state(state)
        .layer(from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        // Permissive CORS for webhook-platform compatibility.
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::PUT,
                    Method::POST,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
}
