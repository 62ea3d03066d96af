//! Design history model and DTOs.

use roomcraft_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A `design_history` row without the image columns, as listed by admins.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSummary {
    pub id: DbId,
    pub prompt: String,
    pub room_type: String,
    pub style: String,
    pub color_scheme: String,
    pub user_agent: String,
    pub ip_address: String,
    pub created_at: Timestamp,
}

/// DTO for recording a completed generation.
#[derive(Debug, Clone)]
pub struct CreateDesignHistory {
    /// Truncated prefix of the uploaded data URL.
    pub original_image_url: String,
    /// Generated data URLs, in generation order.
    pub generated_images: Vec<String>,
    pub prompt: String,
    pub room_type: String,
    pub style: String,
    pub color_scheme: String,
    pub user_agent: String,
    pub ip_address: String,
}
