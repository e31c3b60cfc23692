use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorCode, FieldViolation, validation::violations};
use database::DatabaseError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Validation failed")]
    Validation(Vec<FieldViolation>),

    #[error("User not found: {0}")]
    NotFound(i32),

    #[error("Username '{0}' already exists")]
    DuplicateUsername(String),

    #[error("{message}")]
    Database {
        message: &'static str,
        code: ErrorCode,
        #[source]
        source: DatabaseError,
    },
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(_) => ErrorCode::ValidationError,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::DuplicateUsername(_) => ErrorCode::Conflict,
            Self::Database { code, .. } => *code,
        }
    }
}

impl From<ValidationErrors> for UserError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(violations(&errors))
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Validation(details) => AppError::Validation {
                message: ErrorCode::ValidationError.default_message().to_string(),
                details,
            },
            UserError::NotFound(_) => AppError::NotFound {
                resource: "User".to_string(),
                code: ErrorCode::NotFound,
            },
            UserError::DuplicateUsername(_) => {
                AppError::Conflict("Username already exists".to_string())
            }
            UserError::Database { message, code, .. } => AppError::Database {
                message: message.to_string(),
                code,
            },
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
