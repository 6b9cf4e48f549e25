//! Request body extractors.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde_json::json;

use crate::error::AppError;

/// JSON body extractor that reports deserialization failures as 400 with the
/// standard error envelope.
///
/// Axum's own `Json` rejects malformed or wrong-typed bodies with a
/// plain-text 422; this wrapper folds those rejections into
/// [`AppError::Validation`] so type errors and missing-field errors reach the
/// client in the same shape.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::bad_request(
                "Validation failed",
                json!({ "body": [rejection.body_text()] }),
            )),
        }
    }
}
