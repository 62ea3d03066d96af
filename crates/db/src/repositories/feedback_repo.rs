//! Repository for the `feedback` table.

use roomcraft_core::types::DbId;
use sqlx::PgPool;

use crate::models::feedback::CreateFeedback;

pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Insert a feedback row, returning its id.
    pub async fn create(pool: &PgPool, input: &CreateFeedback) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO feedback (name, email, message, kind) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.message)
        .bind(&input.kind)
        .fetch_one(pool)
        .await
    }
}
