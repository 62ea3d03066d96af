//! REST client for the Gemini generative language API.
//!
//! Wraps `POST /v1beta/models/{model}:generateContent` using [`reqwest`] and
//! implements [`DesignGenerator`] on top of it.

use async_trait::async_trait;
use roomcraft_core::data_url::InlineImage;
use roomcraft_core::error::CoreError;
use roomcraft_core::generation::{CandidateReply, DesignGenerator};

use crate::messages::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp-image-generation";

/// Public API host.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Errors from the Gemini REST layer.
#[derive(Debug, thiserror::Error)]
pub enum GeminiApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Gemini returned a non-2xx status code.
    #[error("{message}")]
    ApiError {
        status: u16,
        /// Upstream `error.message`, or the raw body if it was not JSON.
        message: String,
    },

    /// The success body could not be parsed.
    #[error("Malformed generation response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<GeminiApiError> for CoreError {
    fn from(err: GeminiApiError) -> Self {
        CoreError::Generation(err.to_string())
    }
}

/// HTTP client bound to one API key and model.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiClient {
    /// Create a client. No request timeout is set: a generation call runs
    /// until the upstream answers or the connection fails.
    pub fn new(api_key: String, model: String, api_base: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one `generateContent` request.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiApiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        );

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GeminiApiError::ApiError {
                status: status.as_u16(),
                message: upstream_message(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Extract `error.message` from an error body, falling back to the raw text.
fn upstream_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ => body.to_string(),
    }
}

#[async_trait]
impl DesignGenerator for GeminiClient {
    async fn generate(
        &self,
        instruction: &str,
        image: &InlineImage,
    ) -> Result<CandidateReply, CoreError> {
        let request = GenerateContentRequest::design(instruction, image);

        tracing::debug!(model = %self.model, mime_type = %image.mime_type, "Sending generation request");

        match self.generate_content(&request).await {
            Ok(response) => Ok(response.into_reply()),
            Err(e) => {
                tracing::warn!(model = %self.model, error = %e, "Generation request failed");
                Err(e.into())
            }
        }
    }
}
