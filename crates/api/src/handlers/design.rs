//! Handler for AI room redesign.

use axum::extract::State;
use axum::Json;
use roomcraft_core::design::DesignRoomInput;
use serde::Serialize;

use crate::engine::design::DesignPipeline;
use crate::error::DesignFailure;
use crate::extract::{BodyRejection, JsonOrForm};
use crate::middleware::client::ClientMeta;
use crate::state::AppState;

/// Success body of `POST /design-room`.
#[derive(Debug, Serialize)]
pub struct DesignRoomResponse {
    /// Generated images as data URLs, in generation order.
    pub images: Vec<String>,
    pub text: String,
    pub success: bool,
}

// ---------------------------------------------------------------------------
// POST /design-room
// ---------------------------------------------------------------------------

/// Redesign the uploaded room photo according to the prompt.
pub async fn design_room(
    State(state): State<AppState>,
    client: ClientMeta,
    payload: Result<JsonOrForm<DesignRoomInput>, BodyRejection>,
) -> Result<Json<DesignRoomResponse>, DesignFailure> {
    let JsonOrForm(input) = payload?;

    let result = DesignPipeline::from_state(&state).run(input, &client).await?;

    Ok(Json(DesignRoomResponse {
        images: result.images,
        text: result.text,
        success: true,
    }))
}
