//! API usage model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

/// DTO for a single handled HTTP request.
#[derive(Debug, Clone)]
pub struct CreateApiUsage {
    /// Request path without the query string.
    pub endpoint: String,
    pub method: String,
    pub status_code: i32,
    pub response_time_ms: i64,
    pub user_agent: String,
    pub ip_address: String,
}

/// Aggregated request count and mean latency for one endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointStats {
    pub endpoint: String,
    pub count: i64,
    /// Mean `response_time_ms` across all recorded requests.
    pub avg_response_time: f64,
}
