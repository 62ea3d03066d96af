//! Route definitions for the `/admin` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /designs    -> list_designs
/// GET    /stats      -> usage_stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/designs", get(admin::list_designs))
        .route("/stats", get(admin::usage_stats))
}
