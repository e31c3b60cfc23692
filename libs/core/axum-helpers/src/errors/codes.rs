//! Stable, machine-readable error codes returned in every error body.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::CreateFailed;
//! assert_eq!(code.as_str(), "OP_001");
//! assert_eq!(code.status().as_u16(), 500);
//! ```

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error code carried in the `code` field of [`super::ErrorResponse`].
///
/// Serializes as its wire string (`"VAL_001"`, `"NF_001"`, ...). The
/// "operation failed" codes distinguish which persistence step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ErrorCode {
    /// Request body, path or query failed validation
    #[serde(rename = "VAL_001")]
    ValidationError,

    /// Entity is missing or soft-deleted, or the route does not exist
    #[serde(rename = "NF_001")]
    NotFound,

    #[serde(rename = "AUTH_001")]
    Unauthorized,

    #[serde(rename = "AUTH_004")]
    Forbidden,

    /// Unique constraint rejected the write
    #[serde(rename = "DB_004")]
    Conflict,

    #[serde(rename = "DB_002")]
    DatabaseError,

    #[serde(rename = "OP_001")]
    CreateFailed,

    #[serde(rename = "OP_002")]
    UpdateFailed,

    #[serde(rename = "OP_003")]
    DeleteFailed,

    #[serde(rename = "OP_004")]
    ReadFailed,

    #[serde(rename = "GEN_001")]
    InternalError,

    #[serde(rename = "GEN_002")]
    BadRequest,

    /// A dependency such as the database is unreachable
    #[serde(rename = "EXT_001")]
    ServiceUnavailable,

    /// Client exceeded the configured request budget
    #[serde(rename = "RATE_001")]
    RateLimited,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidationError => "VAL_001",
            Self::NotFound => "NF_001",
            Self::Unauthorized => "AUTH_001",
            Self::Forbidden => "AUTH_004",
            Self::Conflict => "DB_004",
            Self::DatabaseError => "DB_002",
            Self::CreateFailed => "OP_001",
            Self::UpdateFailed => "OP_002",
            Self::DeleteFailed => "OP_003",
            Self::ReadFailed => "OP_004",
            Self::InternalError => "GEN_001",
            Self::BadRequest => "GEN_002",
            Self::ServiceUnavailable => "EXT_001",
            Self::RateLimited => "RATE_001",
        }
    }

    /// HTTP status this code is rendered with.
    ///
    /// `RateLimited` reports 429 here; the rate limiter overrides it with the
    /// configured status.
    pub const fn status(self) -> StatusCode {
        match self {
            Self::ValidationError | Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Conflict => StatusCode::CONFLICT,
            Self::DatabaseError
            | Self::CreateFailed
            | Self::UpdateFailed
            | Self::DeleteFailed
            | Self::ReadFailed
            | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    pub const fn default_message(self) -> &'static str {
        match self {
            Self::ValidationError => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::Conflict => "Resource already exists",
            Self::DatabaseError => "Database error",
            Self::CreateFailed => "Create operation failed",
            Self::UpdateFailed => "Update operation failed",
            Self::DeleteFailed => "Delete operation failed",
            Self::ReadFailed => "Read operation failed",
            Self::InternalError => "Internal server error",
            Self::BadRequest => "Bad request",
            Self::ServiceUnavailable => "Service unavailable",
            Self::RateLimited => "Too many requests, please try again later.",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorCode; 14] = [
        ErrorCode::ValidationError,
        ErrorCode::NotFound,
        ErrorCode::Unauthorized,
        ErrorCode::Forbidden,
        ErrorCode::Conflict,
        ErrorCode::DatabaseError,
        ErrorCode::CreateFailed,
        ErrorCode::UpdateFailed,
        ErrorCode::DeleteFailed,
        ErrorCode::ReadFailed,
        ErrorCode::InternalError,
        ErrorCode::BadRequest,
        ErrorCode::ServiceUnavailable,
        ErrorCode::RateLimited,
    ];

    #[test]
    fn test_serialized_form_matches_as_str() {
        for code in ALL {
            let json = serde_json::to_value(code).unwrap();
            assert_eq!(json, serde_json::Value::String(code.as_str().to_string()));
        }
    }

    #[test]
    fn test_operation_codes_are_distinct_server_errors() {
        let ops = [
            ErrorCode::CreateFailed,
            ErrorCode::UpdateFailed,
            ErrorCode::DeleteFailed,
            ErrorCode::ReadFailed,
        ];
        for op in ops {
            assert_eq!(op.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
        let strings: std::collections::HashSet<_> = ops.iter().map(|c| c.as_str()).collect();
        assert_eq!(strings.len(), 4);
    }

    #[test]
    fn test_client_error_statuses() {
        assert_eq!(ErrorCode::ValidationError.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(ErrorCode::Conflict.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_deserialize_from_wire_string() {
        let code: ErrorCode = serde_json::from_str("\"NF_001\"").unwrap();
        assert_eq!(code, ErrorCode::NotFound);
    }
}
