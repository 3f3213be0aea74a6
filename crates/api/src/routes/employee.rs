//! Route definitions for the `/employees` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::employee;
use crate::state::AppState;

/// Routes mounted at `/employees`.
///
/// ```text
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> replace
/// GET    /{id}/reporting-structure  -> reporting_structure
/// GET    /{id}/compensation         -> compensation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(employee::create))
        .route("/{id}", get(employee::get_by_id).put(employee::replace))
        .route(
            "/{id}/reporting-structure",
            get(employee::reporting_structure),
        )
        .route("/{id}/compensation", get(employee::compensation))
}
