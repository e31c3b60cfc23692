use tracing::{error, info};

/// Closes the PostgreSQL pool during shutdown, logging the outcome.
///
/// ```ignore
/// create_production_app(router, &config.server, timeout, close_pool(db)).await?;
/// ```
pub async fn close_pool(db: sea_orm::DatabaseConnection) {
    match db.close().await {
        Ok(()) => info!("PostgreSQL pool closed"),
        Err(e) => error!("Error closing PostgreSQL pool: {}", e),
    }
}
