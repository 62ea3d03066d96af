//! Read-only analytics endpoints.

use axum::extract::State;
use axum::Json;
use roomcraft_db::models::api_usage::EndpointStats;
use roomcraft_db::models::design_history::DesignSummary;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Maximum number of designs returned by the listing.
pub const DESIGN_LIST_LIMIT: i64 = 100;

#[derive(Debug, Serialize)]
pub struct DesignListResponse {
    pub success: bool,
    pub designs: Vec<DesignSummary>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: Vec<EndpointStats>,
}

// ---------------------------------------------------------------------------
// GET /admin/designs
// ---------------------------------------------------------------------------

/// Most recent designs, newest first, without image data.
pub async fn list_designs(State(state): State<AppState>) -> AppResult<Json<DesignListResponse>> {
    const CONTEXT: &str = "Failed to fetch designs";

    let store = state
        .store
        .as_ref()
        .ok_or(AppError::StorageUnavailable(CONTEXT))?;

    let designs = store
        .recent_designs(DESIGN_LIST_LIMIT)
        .await
        .map_err(|source| AppError::Query {
            context: CONTEXT,
            source,
        })?;

    Ok(Json(DesignListResponse {
        success: true,
        designs,
    }))
}

// ---------------------------------------------------------------------------
// GET /admin/stats
// ---------------------------------------------------------------------------

/// Request count and average response time per endpoint.
pub async fn usage_stats(State(state): State<AppState>) -> AppResult<Json<StatsResponse>> {
    const CONTEXT: &str = "Failed to fetch stats";

    let store = state
        .store
        .as_ref()
        .ok_or(AppError::StorageUnavailable(CONTEXT))?;

    let stats = store.usage_stats().await.map_err(|source| AppError::Query {
        context: CONTEXT,
        source,
    })?;

    Ok(Json(StatsResponse {
        success: true,
        stats,
    }))
}
