pub mod admin;
pub mod design;
pub mod feedback;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /health                 GET   service health
/// /design-room            POST  generate redesigned room images
/// /feedback               POST  submit feedback
/// /admin/designs          GET   recent design history
/// /admin/stats            GET   per-endpoint usage stats
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(design::router())
        .merge(feedback::router())
        .nest("/admin", admin::router())
}
