use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorCode, FieldViolation, validation::violations};
use database::DatabaseError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("Validation failed")]
    Validation(Vec<FieldViolation>),

    #[error("Material not found: {0}")]
    NotFound(i32),

    /// A persistence step failed; `code` tells which one.
    #[error("{message}")]
    Database {
        message: &'static str,
        code: ErrorCode,
        #[source]
        source: DatabaseError,
    },
}

pub type MaterialResult<T> = Result<T, MaterialError>;

impl MaterialError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(_) => ErrorCode::ValidationError,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::Database { code, .. } => *code,
        }
    }
}

impl From<ValidationErrors> for MaterialError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(violations(&errors))
    }
}

/// Convert MaterialError to AppError for standardized error responses
impl From<MaterialError> for AppError {
    fn from(err: MaterialError) -> Self {
        match err {
            MaterialError::Validation(details) => AppError::Validation {
                message: ErrorCode::ValidationError.default_message().to_string(),
                details,
            },
            MaterialError::NotFound(_) => AppError::NotFound {
                resource: "Material".to_string(),
                code: ErrorCode::NotFound,
            },
            MaterialError::Database { message, code, .. } => AppError::Database {
                message: message.to_string(),
                code,
            },
        }
    }
}

impl IntoResponse for MaterialError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
