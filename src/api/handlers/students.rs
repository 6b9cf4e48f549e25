//! Handlers for the student resource endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::student::{StudentItem, StudentPayload};
use crate::api::extractors::AppJson;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all students.
///
/// # Endpoint
///
/// `GET /students`
pub async fn student_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentItem>>, AppError> {
    let students = state.students.list().await?;

    Ok(Json(students.into_iter().map(StudentItem::from).collect()))
}

/// Creates a new student.
///
/// # Endpoint
///
/// `POST /students`
///
/// # Errors
///
/// Returns 400 with per-field messages if the body fails validation, and 400
/// with the same envelope if it fails to deserialize at all.
pub async fn create_student_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<StudentPayload>,
) -> Result<(StatusCode, Json<StudentItem>), AppError> {
    payload.validate()?;

    let student = state.students.create(payload.into_new_student()).await?;

    Ok((StatusCode::CREATED, Json(StudentItem::from(student))))
}

/// Retrieves a single student by id.
///
/// # Endpoint
///
/// `GET /students/{id}`
///
/// # Errors
///
/// Returns 404 if no student exists under `id`.
pub async fn student_detail_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<StudentItem>, AppError> {
    let student = state
        .students
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Student not found", json!({ "id": id })))?;

    Ok(Json(StudentItem::from(student)))
}

/// Replaces a student record in full. The id is never changed.
///
/// # Endpoint
///
/// `PUT /students/{id}`
///
/// # Errors
///
/// Returns 404 if no student exists under `id`; the lookup happens before
/// validation, so an invalid body against a missing record still yields 404.
/// Returns 400 with per-field messages if the body fails validation, leaving
/// the stored record untouched.
pub async fn update_student_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    AppJson(payload): AppJson<StudentPayload>,
) -> Result<Json<StudentItem>, AppError> {
    if state.students.find_by_id(id).await?.is_none() {
        return Err(AppError::not_found("Student not found", json!({ "id": id })));
    }

    payload.validate()?;

    let student = state
        .students
        .update(id, payload.into_new_student())
        .await?
        .ok_or_else(|| AppError::not_found("Student not found", json!({ "id": id })))?;

    Ok(Json(StudentItem::from(student)))
}

/// Deletes a student.
///
/// # Endpoint
///
/// `DELETE /students/{id}`
///
/// # Errors
///
/// Returns 404 if no student exists under `id`.
pub async fn delete_student_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if !state.students.delete(id).await? {
        return Err(AppError::not_found("Student not found", json!({ "id": id })));
    }

    Ok(StatusCode::NO_CONTENT)
}
