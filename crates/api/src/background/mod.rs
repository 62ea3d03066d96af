//! Fire-and-forget persistence.
//!
//! Writes issued from here run as detached Tokio tasks. Their result is
//! logged and dropped; nothing is reported back to the request that caused
//! them.

use std::future::Future;

pub mod history;

/// Spawn `write` on the current runtime, logging a failure under `what`.
pub fn spawn_persist<F, T>(what: &'static str, write: F)
where
    F: Future<Output = Result<T, sqlx::Error>> + Send + 'static,
    T: Send + 'static,
{
    let Ok(handle) = tokio::runtime::Handle::try_current() else {
        tracing::warn!(what, "No async runtime, record dropped");
        return;
    };

    handle.spawn(async move {
        if let Err(e) = write.await {
            tracing::error!(error = %e, what, "Failed to persist record");
        }
    });
}
