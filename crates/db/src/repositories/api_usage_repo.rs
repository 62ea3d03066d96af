//! Repository for the `api_usage` table.

use roomcraft_core::types::DbId;
use sqlx::PgPool;

use crate::models::api_usage::{CreateApiUsage, EndpointStats};

/// Provides insert and aggregation operations for API usage records.
pub struct ApiUsageRepo;

impl ApiUsageRepo {
    /// Insert a usage row, returning its id.
    pub async fn create(pool: &PgPool, input: &CreateApiUsage) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO api_usage \
                (endpoint, method, status_code, response_time_ms, user_agent, ip_address) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
        )
        .bind(&input.endpoint)
        .bind(&input.method)
        .bind(input.status_code)
        .bind(input.response_time_ms)
        .bind(&input.user_agent)
        .bind(&input.ip_address)
        .fetch_one(pool)
        .await
    }

    /// Request count and mean response time grouped by endpoint.
    pub async fn stats_by_endpoint(pool: &PgPool) -> Result<Vec<EndpointStats>, sqlx::Error> {
        sqlx::query_as::<_, EndpointStats>(
            "SELECT endpoint, \
                    COUNT(*) AS count, \
                    AVG(response_time_ms)::DOUBLE PRECISION AS avg_response_time \
             FROM api_usage \
             GROUP BY endpoint \
             ORDER BY endpoint",
        )
        .fetch_all(pool)
        .await
    }
}
