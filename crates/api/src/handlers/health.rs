use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    /// `connected`, `unreachable`, or `disabled` (degraded mode).
    pub storage: &'static str,
}

/// GET /health -- the service is up; storage state is informational only.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let storage = match &state.store {
        Some(store) if store.ping().await.is_ok() => "connected",
        Some(_) => "unreachable",
        None => "disabled",
    };

    Json(HealthResponse {
        status: "OK",
        message: "AI Room Design Generator Backend is running",
        storage,
    })
}
