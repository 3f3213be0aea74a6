//! Handlers for the `/employees` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::Json;
use orgchart_core::models::{Compensation, Employee, EmployeeDraft, ReportingStructure};

use super::json_body;
use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/employees
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeDraft>, JsonRejection>,
) -> AppResult<(StatusCode, [(axum::http::HeaderName, String); 1], Json<Employee>)> {
    let employee = state.employees.create(json_body(payload)?).await?;
    let location = format!("/api/v1/employees/{}", employee.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(employee)))
}

/// GET /api/v1/employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let employee = state.employees.get_by_id(&id).await?;
    Ok(Json(employee))
}

/// PUT /api/v1/employees/{id}
///
/// Any id in the body is ignored; the record keeps `{id}`.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeDraft>, JsonRejection>,
) -> AppResult<Json<Employee>> {
    let employee = state
        .employees
        .replace_by_id(&id, json_body(payload)?)
        .await?;
    Ok(Json(employee))
}

/// GET /api/v1/employees/{id}/reporting-structure
pub async fn reporting_structure(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ReportingStructure>> {
    let structure = state.reporting.resolve(&id).await?;
    Ok(Json(structure))
}

/// GET /api/v1/employees/{id}/compensation
pub async fn compensation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Compensation>> {
    let compensation = state.compensations.get_by_employee_id(&id).await?;
    Ok(Json(compensation))
}
