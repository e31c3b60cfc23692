//! Shared application state.

use database::postgres::DatabaseConnection;

/// Built once in `main`; cloning only copies handles.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// The process-wide PostgreSQL pool
    pub db: DatabaseConnection,
}
