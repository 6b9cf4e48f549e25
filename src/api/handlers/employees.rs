//! Handlers for the employee resource endpoints.
//!
//! Same request flow as the student handlers, against the employee store.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::employee::{EmployeeItem, EmployeePayload};
use crate::api::extractors::AppJson;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all employees.
///
/// # Endpoint
///
/// `GET /employees`
pub async fn employee_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeItem>>, AppError> {
    let employees = state.employees.list().await?;

    Ok(Json(
        employees.into_iter().map(EmployeeItem::from).collect(),
    ))
}

/// Creates a new employee.
///
/// # Endpoint
///
/// `POST /employees`
///
/// # Errors
///
/// Returns 400 with per-field messages if the body fails validation, and 400
/// with the same envelope if it fails to deserialize at all.
pub async fn create_employee_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<EmployeePayload>,
) -> Result<(StatusCode, Json<EmployeeItem>), AppError> {
    payload.validate()?;

    let employee = state.employees.create(payload.into_new_employee()).await?;

    Ok((StatusCode::CREATED, Json(EmployeeItem::from(employee))))
}

/// Retrieves a single employee by id.
///
/// # Endpoint
///
/// `GET /employees/{id}`
///
/// # Errors
///
/// Returns 404 if no employee exists under `id`.
pub async fn employee_detail_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<EmployeeItem>, AppError> {
    let employee = state
        .employees
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Employee not found", json!({ "id": id })))?;

    Ok(Json(EmployeeItem::from(employee)))
}

/// Replaces an employee record in full. The id is never changed.
///
/// # Endpoint
///
/// `PUT /employees/{id}`
///
/// # Errors
///
/// Returns 404 if no employee exists under `id`.
/// Returns 400 with per-field messages if the body fails validation, leaving
/// the stored record untouched.
pub async fn update_employee_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    AppJson(payload): AppJson<EmployeePayload>,
) -> Result<Json<EmployeeItem>, AppError> {
    if state.employees.find_by_id(id).await?.is_none() {
        return Err(AppError::not_found(
            "Employee not found",
            json!({ "id": id }),
        ));
    }

    payload.validate()?;

    let employee = state
        .employees
        .update(id, payload.into_new_employee())
        .await?
        .ok_or_else(|| AppError::not_found("Employee not found", json!({ "id": id })))?;

    Ok(Json(EmployeeItem::from(employee)))
}

/// Deletes an employee.
///
/// # Endpoint
///
/// `DELETE /employees/{id}`
///
/// # Errors
///
/// Returns 404 if no employee exists under `id`.
pub async fn delete_employee_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if !state.employees.delete(id).await? {
        return Err(AppError::not_found(
            "Employee not found",
            json!({ "id": id }),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}
