/// Unified database error type for all persistence operations
///
/// Repositories return this type; use-cases translate it into their domain
/// error so the store's native error never reaches a handler.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// PostgreSQL-specific errors (SeaORM)
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// The targeted row does not exist or has been soft-deleted
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// A unique constraint rejected the write
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    /// Connection failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Migration error
    #[error("Migration error: {0}")]
    MigrationError(String),

    /// Generic database error
    #[error("Database error: {0}")]
    Generic(String),
}

#[cfg(feature = "postgres")]
impl DatabaseError {
    /// Classifies a SeaORM error, lifting unique-constraint violations and
    /// missed updates out of the opaque `Postgres` variant.
    pub fn from_db_err(err: sea_orm::DbErr, what: impl std::fmt::Display) -> Self {
        if matches!(err, sea_orm::DbErr::RecordNotUpdated) {
            return Self::RecordNotFound(what.to_string());
        }
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => {
                Self::UniqueViolation(detail)
            }
            _ => Self::Postgres(err),
        }
    }
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
