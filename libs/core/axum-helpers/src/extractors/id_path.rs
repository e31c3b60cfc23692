//! Numeric `:id` path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

pub const INVALID_ID_MESSAGE: &str = "ID must be a positive number";

/// A positive `i32` taken from the `{id}` path segment.
///
/// Anything else (non-numeric, zero, negative, overflowing) is rejected
/// with 400 `VAL_001` before the handler runs.
///
/// # Example
/// ```ignore
/// async fn get_material(IdPath(id): IdPath) -> String {
///     format!("Material ID: {}", id)
/// }
///
/// let app = Router::new().route("/materials/{id}", get(get_material));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i32);

impl IdPath {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.trim().parse::<i32>() {
            Ok(id) if id > 0 => Ok(IdPath(id)),
            _ => Err(AppError::invalid_field(INVALID_ID_MESSAGE, "id", "positive")),
        }
    }
}

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        IdPath::parse(&raw)
    }
}
