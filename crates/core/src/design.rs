//! Room design requests: input contract, instruction template, and the
//! history-side truncation of the original image.

use serde::Deserialize;

use crate::error::CoreError;
use crate::validation::require_fields;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Message returned when `imageData` or `prompt` is missing.
pub const MISSING_FIELDS_MESSAGE: &str =
    "Missing required fields: imageData and prompt are required";

/// Message returned when no generation service credential is configured.
pub const MISSING_API_KEY_MESSAGE: &str =
    "API key is missing. Please configure your environment variables.";

/// Number of leading characters of the original data URL kept in history.
pub const ORIGINAL_IMAGE_PREFIX_LEN: usize = 100;

/// Suffix appended to the truncated original image reference.
pub const TRUNCATION_MARKER: &str = "...";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Raw JSON body of `POST /api/design-room`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRoomInput {
    pub image_data: Option<String>,
    pub prompt: Option<String>,
    pub room_type: Option<String>,
    pub style: Option<String>,
    pub color_scheme: Option<String>,
}

/// Optional style tags chosen by the client. Absent tags are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesignTags {
    pub room_type: String,
    pub style: String,
    pub color_scheme: String,
}

/// A validated design request, owned by a single pipeline run.
#[derive(Debug, Clone)]
pub struct DesignRequest {
    /// The uploaded photo as a data URL.
    pub image_data: String,
    pub prompt: String,
    pub tags: DesignTags,
}

impl DesignRoomInput {
    /// Enforce the required fields and fill tag defaults.
    pub fn validate(self) -> Result<DesignRequest, CoreError> {
        require_fields(
            &[
                ("imageData", self.image_data.as_deref()),
                ("prompt", self.prompt.as_deref()),
            ],
            MISSING_FIELDS_MESSAGE,
        )?;

        Ok(DesignRequest {
            image_data: self.image_data.unwrap_or_default(),
            prompt: self.prompt.unwrap_or_default(),
            tags: DesignTags {
                room_type: self.room_type.unwrap_or_default(),
                style: self.style.unwrap_or_default(),
                color_scheme: self.color_scheme.unwrap_or_default(),
            },
        })
    }
}

// ---------------------------------------------------------------------------
// Instruction template
// ---------------------------------------------------------------------------

/// Wrap the caller's prompt in the structure-preserving redesign instruction.
pub fn build_instruction(prompt: &str) -> String {
    format!(
        "Redesign this room with: {prompt}. Only modify the interior design elements \
         while preserving the room's structure, dimensions, windows, doors, and general \
         layout. Make the new design look realistic, practical, and harmonious with the \
         existing space."
    )
}

/// Truncate the original image reference stored in design history.
///
/// The marker is always appended, even when the input is shorter than the
/// prefix length.
pub fn truncate_original_image(image_data: &str) -> String {
    let mut truncated: String = image_data.chars().take(ORIGINAL_IMAGE_PREFIX_LEN).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}
