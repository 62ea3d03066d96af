//! The design-generation pipeline.
//!
//! ```text
//! Received -> Validated -> Decoded -> Dispatched -> Decomposed -> Responded
//!    |            |           |            |              \
//!    |            |           |            +-> Failed      +-> history (detached)
//!    |            |           +-> Rejected (bad data URL)
//!    |            +-> Unconfigured (no API key)
//!    +-> Rejected (missing field)
//! ```

use std::sync::Arc;

use roomcraft_core::data_url;
use roomcraft_core::design::{build_instruction, DesignRoomInput, MISSING_API_KEY_MESSAGE};
use roomcraft_core::error::CoreError;
use roomcraft_core::generation::{decompose, DesignGenerator, GenerationResult};
use roomcraft_db::Store;

use crate::background::history;
use crate::middleware::client::ClientMeta;
use crate::state::AppState;

/// Runs one design request end to end.
pub struct DesignPipeline {
    generator: Option<Arc<dyn DesignGenerator>>,
    store: Option<Arc<dyn Store>>,
}

impl DesignPipeline {
    pub fn new(
        generator: Option<Arc<dyn DesignGenerator>>,
        store: Option<Arc<dyn Store>>,
    ) -> Self {
        Self { generator, store }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.generator.clone(), state.store.clone())
    }

    /// Validate, decode, generate, and decompose.
    ///
    /// On success a history write is queued before returning; its outcome
    /// never affects the returned result. Nothing is retried.
    pub async fn run(
        &self,
        input: DesignRoomInput,
        client: &ClientMeta,
    ) -> Result<GenerationResult, CoreError> {
        let request = input.validate()?;

        let generator = self
            .generator
            .as_ref()
            .ok_or_else(|| CoreError::Configuration(MISSING_API_KEY_MESSAGE.to_string()))?;

        let image = data_url::decode(&request.image_data)?;

        let instruction = build_instruction(&request.prompt);
        let reply = generator.generate(&instruction, &image).await?;

        let result = decompose(&reply);
        tracing::info!(
            images = result.images.len(),
            has_text = !result.text.is_empty(),
            room_type = %request.tags.room_type,
            style = %request.tags.style,
            "Room design generated",
        );

        history::record(self.store.as_ref(), &request, &result, client);

        Ok(result)
    }
}
