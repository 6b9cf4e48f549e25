use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!("database error: {e}");
        AppError::internal("Database error", json!({}))
    }
}

/// Collects every offending field into the error details, so a body missing
/// both `name` and `age` reports both in a single response.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut details = serde_json::Map::new();

        for (field, field_errors) in errors.field_errors() {
            let messages: Vec<String> = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid value for constraint '{}'", e.code))
                })
                .collect();
            details.insert(field.to_string(), json!(messages));
        }

        AppError::bad_request("Validation failed", Value::Object(details))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Payload {
        #[validate(required(message = "This field is required."))]
        name: Option<String>,
        #[validate(required(message = "This field is required."))]
        age: Option<i64>,
    }

    #[test]
    fn test_validation_errors_enumerate_all_fields() {
        let payload = Payload {
            name: None,
            age: None,
        };

        let err = AppError::from(payload.validate().unwrap_err());

        match err {
            AppError::Validation { details, .. } => {
                assert!(details.get("name").is_some());
                assert!(details.get("age").is_some());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_errors_single_field() {
        let payload = Payload {
            name: Some("Linh".to_string()),
            age: None,
        };

        let err = AppError::from(payload.validate().unwrap_err());

        match err {
            AppError::Validation { details, .. } => {
                assert!(details.get("name").is_none());
                assert_eq!(details["age"][0], "This field is required.");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
