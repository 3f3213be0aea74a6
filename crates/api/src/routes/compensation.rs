//! Route definitions for the `/compensations` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::compensation;
use crate::state::AppState;

/// Routes mounted at `/compensations`.
///
/// ```text
/// POST   /   -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(compensation::create))
}
