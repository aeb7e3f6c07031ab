use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::startup::AppState;

/// Liveness probe.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "wellness-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe: checks the provider is configured and reachable.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.companion.provider_health().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Provider not ready");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
