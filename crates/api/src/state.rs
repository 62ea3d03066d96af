use std::sync::Arc;

use roomcraft_core::generation::DesignGenerator;
use roomcraft_db::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at startup. Cheaply cloneable: everything is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Generation service. `None` when no API key is configured.
    pub generator: Option<Arc<dyn DesignGenerator>>,
    /// Persistence. `None` when storage was unreachable at startup.
    pub store: Option<Arc<dyn Store>>,
}
