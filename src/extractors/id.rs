//! Integer record id from the `{id}` path segment.

use crate::error::{AppError, ValidationErrors};
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Path id. A non-integer segment is a validation error (422), not axum's 400.
#[derive(Clone, Copy, Debug)]
pub struct RecordId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Validation(ValidationErrors::single("id", e.body_text())))?;
        Ok(RecordId(id))
    }
}
