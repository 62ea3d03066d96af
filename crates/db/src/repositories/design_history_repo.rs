//! Repository for the `design_history` table.

use roomcraft_core::types::DbId;
use sqlx::PgPool;

use crate::models::design_history::{CreateDesignHistory, DesignSummary};

/// Columns returned by admin listings. Image columns are excluded.
const SUMMARY_COLUMNS: &str = "\
    id, prompt, room_type, style, color_scheme, \
    user_agent, ip_address, created_at";

/// Provides insert and listing operations for design history.
pub struct DesignHistoryRepo;

impl DesignHistoryRepo {
    /// Insert a history row, returning its id.
    pub async fn create(pool: &PgPool, input: &CreateDesignHistory) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO design_history \
                (original_image_url, generated_images, prompt, room_type, \
                 style, color_scheme, user_agent, ip_address) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING id",
        )
        .bind(&input.original_image_url)
        .bind(&input.generated_images)
        .bind(&input.prompt)
        .bind(&input.room_type)
        .bind(&input.style)
        .bind(&input.color_scheme)
        .bind(&input.user_agent)
        .bind(&input.ip_address)
        .fetch_one(pool)
        .await
    }

    /// List the most recent designs, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<DesignSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM design_history \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, DesignSummary>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
