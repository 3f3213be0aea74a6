//! Handlers for the `/compensations` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use orgchart_core::models::{Compensation, NewCompensation};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/compensations
///
/// A request without a JSON body names no employee and yields 404.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Option<Json<NewCompensation>>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Compensation>)> {
    let request = payload
        .map(|body| body.map(|Json(request)| request))
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let compensation = state.compensations.create(request).await?;
    Ok((StatusCode::CREATED, Json(compensation)))
}
