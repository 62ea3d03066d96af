use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roomcraft_core::error::CoreError;
use serde_json::json;

use crate::extract::BodyRejection;

/// Headline used for every non-validation failure of the design endpoint.
const DESIGN_FAILED: &str = "Failed to design room";

/// Application-level error type for the feedback and admin handlers.
///
/// Implements [`IntoResponse`] to produce `{ "error": ..., "message"?: ... }`
/// bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `roomcraft_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body could not be decoded. `context` is the headline
    /// used when a field has the wrong type.
    #[error("{context}: {rejection}")]
    Body {
        context: &'static str,
        #[source]
        rejection: BodyRejection,
    },

    /// A storage query failed. `context` is the user-facing headline.
    #[error("{context}: {source}")]
    Query {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// The process is running without storage.
    #[error("{0}: storage is unavailable")]
    StorageUnavailable(&'static str),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(CoreError::MissingField { field, message }) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": message, "field": field }),
            ),
            AppError::Core(core) => {
                tracing::error!(error = %core, "Internal core error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal error", "message": core.to_string() }),
                )
            }
            AppError::Body { context, rejection } if rejection.is_data_error() => {
                tracing::error!(error = %rejection, "{context}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": context, "message": rejection.body_text() }),
                )
            }
            AppError::Body { rejection, .. } => (
                rejection.status(),
                json!({ "error": rejection.body_text() }),
            ),
            AppError::Query { context, source } => {
                tracing::error!(error = %source, "{context}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": context, "message": source.to_string() }),
                )
            }
            AppError::StorageUnavailable(context) => {
                tracing::warn!("{context}: storage is unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": context, "message": "Storage is unavailable" }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Failure of `POST /api/design-room`.
///
/// Always rendered as `{ error, message?, images: [], text: "" }` so the
/// response schema matches the success shape.
#[derive(Debug, thiserror::Error)]
pub enum DesignFailure {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Body(#[from] BodyRejection),
}

impl IntoResponse for DesignFailure {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            DesignFailure::Core(CoreError::MissingField { message, .. }) => {
                (StatusCode::BAD_REQUEST, message, None)
            }
            DesignFailure::Core(CoreError::Configuration(message)) => {
                tracing::error!(error = %message, "Design request rejected: generator not configured");
                (StatusCode::INTERNAL_SERVER_ERROR, message.clone(), Some(message))
            }
            DesignFailure::Core(err) => {
                tracing::error!(error = %err, "Error designing room");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    DESIGN_FAILED.to_string(),
                    Some(err.to_string()),
                )
            }
            DesignFailure::Body(rejection) if rejection.is_data_error() => {
                tracing::error!(error = %rejection, "Error designing room");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    DESIGN_FAILED.to_string(),
                    Some(rejection.body_text()),
                )
            }
            DesignFailure::Body(rejection) => (rejection.status(), rejection.body_text(), None),
        };

        let mut body = json!({
            "error": error,
            "images": [],
            "text": "",
        });
        if let Some(message) = message {
            body["message"] = json!(message);
        }

        (status, axum::Json(body)).into_response()
    }
}
