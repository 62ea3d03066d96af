//! Route definitions for room design generation.

use axum::routing::post;
use axum::Router;

use crate::handlers::design;
use crate::state::AppState;

/// ```text
/// POST   /design-room    -> design_room
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/design-room", post(design::design_room))
}
