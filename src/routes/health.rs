use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

/// Probes provider connectivity; never fails the request itself. The probe
/// carries its own short timeout, so this endpoint cannot block indefinitely.
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let connected = state.ai_service.test_connection().await;

    let body = json!({
        "status": if connected { "healthy" } else { "degraded" },
        "timestamp": Utc::now().to_rfc3339(),
        "groq_api": if connected { "connected" } else { "disconnected" },
        "version": env!("CARGO_PKG_VERSION"),
    });
    (StatusCode::OK, Json(body))
}

#[axum::debug_handler]
pub async fn root() -> impl IntoResponse {
    let body = json!({
        "message": "MCQ Generator AI Agent",
        "version": env!("CARGO_PKG_VERSION"),
    });
    (StatusCode::OK, Json(body))
}

#[axum::debug_handler]
pub async fn ready() -> impl IntoResponse {
    let body = json!({
        "status": "ready",
        "timestamp": Utc::now().to_rfc3339(),
    });
    (StatusCode::OK, Json(body))
}

#[axum::debug_handler]
pub async fn live() -> impl IntoResponse {
    let body = json!({
        "status": "alive",
        "timestamp": Utc::now().to_rfc3339(),
    });
    (StatusCode::OK, Json(body))
}
