//! Decoding and rebuilding of base64 `data:` URLs.
//!
//! Images travel through the API inline as `data:<mime>;base64,<payload>`.
//! The payload is never base64-decoded here; it is passed to the generation
//! service verbatim.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Pattern for an inline base64 data URL. The mime type stops at the first `;`.
pub const DATA_URL_PATTERN: &str = r"^data:([^;]+);base64,(.+)$";

static DATA_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DATA_URL_PATTERN).expect("valid regex"));

/// An image split out of a data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    /// Base64 text exactly as it appeared after the comma.
    pub data: String,
}

/// Split a data URL into its mime type and base64 payload.
///
/// No allow-list is applied to the mime type and no size limit is enforced.
pub fn decode(data_url: &str) -> Result<InlineImage, CoreError> {
    let caps = DATA_URL_RE
        .captures(data_url)
        .ok_or(CoreError::InvalidFormat)?;

    Ok(InlineImage {
        mime_type: caps[1].to_string(),
        data: caps[2].to_string(),
    })
}

/// Rebuild a data URL from a mime type and base64 payload.
pub fn encode(mime_type: &str, data: &str) -> String {
    format!("data:{mime_type};base64,{data}")
}
