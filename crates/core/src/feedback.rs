//! User feedback categories and input validation.

use serde::Deserialize;

use crate::error::CoreError;
use crate::validation::require_fields;

/// Message returned when `name`, `email`, or `message` is missing.
pub const MISSING_FIELDS_MESSAGE: &str =
    "Missing required fields: name, email, and message are required";

/// Closed set of feedback categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedbackKind {
    #[default]
    Feedback,
    Bug,
    Feature,
    Support,
}

impl FeedbackKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feedback => "feedback",
            Self::Bug => "bug",
            Self::Feature => "feature",
            Self::Support => "support",
        }
    }

    /// Parse a client-supplied category, falling back to `feedback` for
    /// absent or unknown values.
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value {
            Some("bug") => Self::Bug,
            Some("feature") => Self::Feature,
            Some("support") => Self::Support,
            _ => Self::Feedback,
        }
    }
}

/// Raw JSON body of `POST /api/feedback`.
#[derive(Debug, Default, Deserialize)]
pub struct FeedbackInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Feedback that passed validation.
#[derive(Debug, Clone)]
pub struct ValidFeedback {
    pub name: String,
    pub email: String,
    pub message: String,
    pub kind: FeedbackKind,
}

impl FeedbackInput {
    pub fn validate(self) -> Result<ValidFeedback, CoreError> {
        require_fields(
            &[
                ("name", self.name.as_deref()),
                ("email", self.email.as_deref()),
                ("message", self.message.as_deref()),
            ],
            MISSING_FIELDS_MESSAGE,
        )?;

        Ok(ValidFeedback {
            kind: FeedbackKind::parse_or_default(self.kind.as_deref()),
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
        })
    }
}
