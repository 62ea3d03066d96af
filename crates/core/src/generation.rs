//! Generation capability contract and reply decomposition.
//!
//! The capability is anything implementing [`DesignGenerator`]: it takes an
//! instruction plus an inline image and returns a [`CandidateReply`]. The
//! reply is flattened into a [`GenerationResult`] by [`decompose`].

use async_trait::async_trait;

use crate::data_url::{self, InlineImage};
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Reply model
// ---------------------------------------------------------------------------

/// A single unit of generated content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyPart {
    Text(String),
    Image { mime_type: String, data: String },
}

/// One candidate answer from the capability, as ordered parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    pub parts: Vec<ReplyPart>,
}

/// Full capability reply. Usually holds exactly one candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateReply {
    pub candidates: Vec<Candidate>,
}

/// Ordered artifacts extracted from a reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResult {
    /// Image data URLs in the order the capability emitted them.
    pub images: Vec<String>,
    /// The last text part of the reply, or empty.
    pub text: String,
}

// ---------------------------------------------------------------------------
// Capability seam
// ---------------------------------------------------------------------------

/// An external service able to redesign a room photo.
#[async_trait]
pub trait DesignGenerator: Send + Sync {
    /// Send `instruction` and `image` in one request asking for text and
    /// image output. Failures map to [`CoreError::Generation`].
    async fn generate(
        &self,
        instruction: &str,
        image: &InlineImage,
    ) -> Result<CandidateReply, CoreError>;
}

// ---------------------------------------------------------------------------
// Decomposition
// ---------------------------------------------------------------------------

/// Flatten the first candidate of `reply` into images and text.
///
/// Images keep arrival order with no deduplication. Each text part replaces
/// the previous one, so only the last text survives. An empty reply yields an
/// empty result.
pub fn decompose(reply: &CandidateReply) -> GenerationResult {
    let mut result = GenerationResult::default();

    let Some(candidate) = reply.candidates.first() else {
        return result;
    };

    for part in &candidate.parts {
        match part {
            ReplyPart::Text(text) => result.text = text.clone(),
            ReplyPart::Image { mime_type, data } => {
                result.images.push(data_url::encode(mime_type, data));
            }
        }
    }

    result
}
