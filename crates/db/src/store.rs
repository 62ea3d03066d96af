//! Storage seam used by the API layer.
//!
//! Handlers and background recorders talk to [`Store`] rather than to the
//! repositories directly, so the HTTP stack can run against an in-memory
//! double in tests. [`PgStore`] is the production implementation.

use async_trait::async_trait;
use roomcraft_core::types::DbId;

use crate::models::api_usage::{CreateApiUsage, EndpointStats};
use crate::models::design_history::{CreateDesignHistory, DesignSummary};
use crate::models::feedback::CreateFeedback;
use crate::repositories::{ApiUsageRepo, DesignHistoryRepo, FeedbackRepo};
use crate::DbPool;

/// The three record collections the service persists.
#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_design(&self, input: &CreateDesignHistory) -> Result<DbId, sqlx::Error>;

    async fn insert_feedback(&self, input: &CreateFeedback) -> Result<DbId, sqlx::Error>;

    async fn insert_usage(&self, input: &CreateApiUsage) -> Result<DbId, sqlx::Error>;

    /// Most recent designs first, at most `limit` rows.
    async fn recent_designs(&self, limit: i64) -> Result<Vec<DesignSummary>, sqlx::Error>;

    async fn usage_stats(&self) -> Result<Vec<EndpointStats>, sqlx::Error>;

    /// Cheap liveness probe.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// [`Store`] backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn insert_design(&self, input: &CreateDesignHistory) -> Result<DbId, sqlx::Error> {
        DesignHistoryRepo::create(&self.pool, input).await
    }

    async fn insert_feedback(&self, input: &CreateFeedback) -> Result<DbId, sqlx::Error> {
        FeedbackRepo::create(&self.pool, input).await
    }

    async fn insert_usage(&self, input: &CreateApiUsage) -> Result<DbId, sqlx::Error> {
        ApiUsageRepo::create(&self.pool, input).await
    }

    async fn recent_designs(&self, limit: i64) -> Result<Vec<DesignSummary>, sqlx::Error> {
        DesignHistoryRepo::list_recent(&self.pool, limit).await
    }

    async fn usage_stats(&self) -> Result<Vec<EndpointStats>, sqlx::Error> {
        ApiUsageRepo::stats_by_endpoint(&self.pool).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
