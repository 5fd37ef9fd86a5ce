//! JSON body extractor whose rejections are validation errors.

use crate::error::{AppError, ValidationErrors};
use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde_json::Value;

/// Raw JSON body. Malformed JSON, a missing `Content-Type: application/json`,
/// or an unreadable body become `AppError::Validation` (422) instead of axum's
/// plain-text rejections. A body over the size limit stays 413.
#[derive(Debug)]
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| {
                if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    AppError::PayloadTooLarge(e.body_text())
                } else {
                    AppError::Validation(ValidationErrors::single("body", e.body_text()))
                }
            })?;
        Ok(JsonBody(value))
    }
}
