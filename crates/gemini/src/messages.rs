//! Wire types for the Gemini `generateContent` endpoint.
//!
//! Only the fields the design pipeline needs are modelled. Response parts are
//! kept as raw JSON until conversion so that one odd part cannot fail the
//! whole reply.

use roomcraft_core::data_url::InlineImage;
use roomcraft_core::generation::{Candidate, CandidateReply, ReplyPart};
use serde::{Deserialize, Serialize};

/// Modalities requested for every design call.
pub const RESPONSE_MODALITIES: [&str; 2] = ["TEXT", "IMAGE"];

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

/// Inline binary content: a mime type plus base64 data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    pub mime_type: String,
    pub data: String,
}

/// A content part. Exactly one field is expected to be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<Blob>,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    fn inline(image: &InlineImage) -> Self {
        Self {
            inline_data: Some(Blob {
                mime_type: image.mime_type.clone(),
                data: image.data.clone(),
            }),
            ..Default::default()
        }
    }

    /// Map onto the domain part. Empty text and parts carrying neither text
    /// nor inline data are dropped.
    fn into_reply_part(self) -> Option<ReplyPart> {
        match (self.text, self.inline_data) {
            (Some(text), _) if !text.is_empty() => Some(ReplyPart::Text(text)),
            (_, Some(blob)) => Some(ReplyPart::Image {
                mime_type: blob.mime_type,
                data: blob.data,
            }),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct RequestContent {
    pub role: &'static str,
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<&'static str>,
}

/// Body of `POST /v1beta/models/{model}:generateContent`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// A single user turn: the instruction text followed by the image.
    pub fn design(instruction: &str, image: &InlineImage) -> Self {
        Self {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![Part::text(instruction), Part::inline(image)],
            }],
            generation_config: GenerationConfig {
                response_modalities: RESPONSE_MODALITIES.to_vec(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct ResponseContent {
    /// `None` when absent or `null`.
    #[serde(default)]
    pub parts: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponseCandidate {
    #[serde(default)]
    pub content: Option<ResponseContent>,
}

/// Body returned by a successful `generateContent` call.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<ResponseCandidate>>,
}

impl GenerateContentResponse {
    /// Convert into the domain reply, skipping any part that does not parse.
    pub fn into_reply(self) -> CandidateReply {
        let candidates = self
            .candidates
            .unwrap_or_default()
            .into_iter()
            .map(|candidate| Candidate {
                parts: candidate
                    .content
                    .unwrap_or_default()
                    .parts
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(|raw| serde_json::from_value::<Part>(raw).ok())
                    .filter_map(Part::into_reply_part)
                    .collect(),
            })
            .collect();

        CandidateReply { candidates }
    }
}

/// Error envelope returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
}
