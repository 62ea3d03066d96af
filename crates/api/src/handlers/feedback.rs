//! Handler for user feedback submissions.

use axum::extract::State;
use axum::Json;
use roomcraft_core::feedback::FeedbackInput;
use roomcraft_db::models::feedback::CreateFeedback;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{BodyRejection, JsonOrForm};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub success: bool,
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// POST /feedback
// ---------------------------------------------------------------------------

/// Accept a feedback message. Storage failures are logged and the
/// submission still succeeds.
pub async fn submit_feedback(
    State(state): State<AppState>,
    payload: Result<JsonOrForm<FeedbackInput>, BodyRejection>,
) -> AppResult<Json<FeedbackResponse>> {
    let JsonOrForm(input) = payload.map_err(|rejection| AppError::Body {
        context: "Failed to save feedback",
        rejection,
    })?;
    let feedback = input.validate()?;

    match &state.store {
        Some(store) => {
            let row = CreateFeedback {
                name: feedback.name,
                email: feedback.email,
                message: feedback.message,
                kind: feedback.kind.as_str().to_string(),
            };
            match store.insert_feedback(&row).await {
                Ok(id) => tracing::info!(feedback_id = id, kind = %row.kind, "Feedback received"),
                Err(e) => tracing::error!(error = %e, "Error saving feedback"),
            }
        }
        None => tracing::debug!("Storage unavailable, feedback not persisted"),
    }

    Ok(Json(FeedbackResponse {
        success: true,
        message: "Feedback received successfully",
    }))
}
