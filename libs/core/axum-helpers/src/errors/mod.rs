pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::validation::{FieldViolation, violations};

/// Error body returned by every failing endpoint.
///
/// ```json
/// {
///   "error": "Validation failed",
///   "code": "VAL_001",
///   "details": [{"field": "quantity", "constraint": "min", "message": "quantity must not be less than 0"}]
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    /// Stable machine-readable code
    pub code: ErrorCode,
    /// Per-field failures, present for validation errors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            error: error.into(),
            code,
            details: None,
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain errors convert into this type, so it is the single place where a
/// failure becomes a status code and an [`ErrorResponse`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("{message}")]
    Validation {
        message: String,
        details: Vec<FieldViolation>,
    },

    #[error("{resource} not found")]
    NotFound { resource: String, code: ErrorCode },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A persistence step failed; `code` names which one
    #[error("{message}")]
    Database { message: String, code: ErrorCode },

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),
}

impl AppError {
    /// Validation failure with a single offending field.
    pub fn invalid_field(
        message: impl Into<String>,
        field: &str,
        constraint: &str,
    ) -> Self {
        let message = message.into();
        Self::Validation {
            details: vec![FieldViolation::new(field, constraint, message.clone())],
            message,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation { .. } | Self::JsonExtractorRejection(_) => {
                ErrorCode::ValidationError
            }
            Self::NotFound { code, .. } | Self::Database { code, .. } => *code,
            Self::Unauthorized(_) => ErrorCode::Unauthorized,
            Self::Forbidden(_) => ErrorCode::Forbidden,
            Self::Conflict(_) => ErrorCode::Conflict,
            Self::BadRequest(_) => ErrorCode::BadRequest,
            Self::InternalServerError(_) => ErrorCode::InternalError,
            Self::ServiceUnavailable(_) => ErrorCode::ServiceUnavailable,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation {
            message: ErrorCode::ValidationError.default_message().to_string(),
            details: violations(&errors),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();

        let (message, details) = match self {
            AppError::Validation { message, details } => {
                tracing::info!(error_code = %code, violations = details.len(), "{}", message);
                (message, Some(details))
            }
            AppError::JsonExtractorRejection(rejection) => {
                tracing::info!(error_code = %code, "Rejected request body: {}", rejection.body_text());
                let details = vec![FieldViolation::new(
                    "body",
                    "json",
                    rejection.body_text(),
                )];
                ("Invalid request body".to_string(), Some(details))
            }
            AppError::NotFound { resource, .. } => {
                tracing::info!(error_code = %code, "{} not found", resource);
                (format!("{resource} not found"), None)
            }
            AppError::Database { message, .. } => {
                // The cause is logged where it is translated; clients only get the summary.
                tracing::error!(error_code = %code, "{}", message);
                (message, None)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(error_code = %code, "Internal server error: {}", msg);
                (code.default_message().to_string(), None)
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!(error_code = %code, "Service unavailable: {}", msg);
                (msg, None)
            }
            AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::Conflict(msg)
            | AppError::BadRequest(msg) => {
                tracing::info!(error_code = %code, "{}", msg);
                (msg, None)
            }
        };

        let body = Json(ErrorResponse {
            error: message,
            code,
            details,
        });

        (code.status(), body).into_response()
    }
}

/// Builds an error response outside the [`AppError`] flow, e.g. from middleware.
pub fn error_response(code: ErrorCode, message: impl Into<String>) -> Response {
    (code.status(), Json(ErrorResponse::new(message, code))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_renders_details() {
        let err = AppError::invalid_field("quantity must not be less than 0", "quantity", "min");
        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VAL_001");
        assert_eq!(body["details"][0]["field"], "quantity");
        assert_eq!(body["details"][0]["constraint"], "min");
    }

    #[tokio::test]
    async fn test_not_found_message_names_resource() {
        let err = AppError::NotFound {
            resource: "Material".to_string(),
            code: ErrorCode::NotFound,
        };
        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Material not found", "code": "NF_001"}));
    }

    #[tokio::test]
    async fn test_database_error_keeps_operation_code() {
        let err = AppError::Database {
            message: "Failed to update material".to_string(),
            code: ErrorCode::UpdateFailed,
        };
        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "OP_002");
        assert_eq!(body["error"], "Failed to update material");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_internal_error_hides_cause() {
        let (status, body) = render(AppError::InternalServerError("secret".into())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "GEN_001");
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn test_conflict_and_unavailable() {
        let (status, body) = render(AppError::Conflict("username taken".into())).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "DB_004");

        let (status, body) = render(AppError::ServiceUnavailable("db down".into())).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], "EXT_001");
    }

    #[test]
    fn test_from_validation_errors() {
        let mut errors = ValidationErrors::new();
        crate::validation::require_non_blank(&mut errors, "name", "");

        let err = AppError::from(errors);
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert!(matches!(err, AppError::Validation { ref details, .. } if details.len() == 1));
    }
}
