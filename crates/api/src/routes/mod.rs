pub mod compensation;
pub mod employee;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /employees                                 create
/// /employees/{id}                            get, replace
/// /employees/{id}/reporting-structure        reporting structure
/// /employees/{id}/compensation               compensation of an employee
/// /compensations                             create compensation
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/employees", employee::router())
        .nest("/compensations", compensation::router())
}
