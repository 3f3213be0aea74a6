//! Request handlers.
//!
//! Handlers delegate to the managers held in [`AppState`](crate::state::AppState)
//! and map errors via [`AppError`].

pub mod compensation;
pub mod employee;

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::{AppError, AppResult};

/// Unwrap a JSON body, turning extractor rejections into the standard error body.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
