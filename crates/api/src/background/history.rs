//! Design history recording.

use std::sync::Arc;

use roomcraft_core::design::{truncate_original_image, DesignRequest};
use roomcraft_core::generation::GenerationResult;
use roomcraft_db::models::design_history::CreateDesignHistory;
use roomcraft_db::Store;

use super::spawn_persist;
use crate::middleware::client::ClientMeta;

/// Queue a history row for a completed generation.
///
/// Does nothing when storage is unavailable. The original image is stored
/// truncated; generated images are stored in full and in order.
pub fn record(
    store: Option<&Arc<dyn Store>>,
    request: &DesignRequest,
    result: &GenerationResult,
    client: &ClientMeta,
) {
    let Some(store) = store else {
        tracing::debug!("Storage unavailable, design history not recorded");
        return;
    };

    let entry = CreateDesignHistory {
        original_image_url: truncate_original_image(&request.image_data),
        generated_images: result.images.clone(),
        prompt: request.prompt.clone(),
        room_type: request.tags.room_type.clone(),
        style: request.tags.style.clone(),
        color_scheme: request.tags.color_scheme.clone(),
        user_agent: client.user_agent.clone(),
        ip_address: client.ip_address.clone(),
    };

    let store = Arc::clone(store);
    spawn_persist("design history", async move { store.insert_design(&entry).await });
}
