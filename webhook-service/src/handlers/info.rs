use axum::{response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

/// GET `/` — service banner, also answered to webhook platforms probing the
/// root endpoint.
pub async fn service_info() -> impl IntoResponse {
    Json(json!({
        "service": "BrightSmile Dental Webhook",
        "status": "online",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// GET `/webhook` — readiness banner listing the exposed endpoints.
pub async fn webhook_info() -> impl IntoResponse {
    Json(json!({
        "service": "BrightSmile Dental Appointment Manager",
        "status": "ready",
        "endpoints": [
            "POST /webhook - Main webhook handler",
            "GET /health - Health check",
            "GET / - Service info",
        ],
    }))
}
