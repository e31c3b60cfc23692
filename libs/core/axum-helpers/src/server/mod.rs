//! Server infrastructure: router assembly, health and readiness helpers,
//! graceful shutdown and pool cleanup.
//!
//! ```ignore
//! let router = create_router::<ApiDoc>(api_routes, environment)
//!     .merge(health_router(app_info!()));
//!
//! create_production_app(router, &config.server, Duration::from_secs(30), close_pool(db)).await?;
//! ```

pub mod app;
pub mod cleanup;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use cleanup::close_pool;
pub use health::{HealthCheckFuture, HealthResponse, ReadyResponse, health_router, run_health_checks};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
