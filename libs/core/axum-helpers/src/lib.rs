//! # Axum Helpers
//!
//! Shared web plumbing for the inventory services.
//!
//! ## Modules
//!
//! - **[`errors`]**: error taxonomy, `ErrorCode` and the JSON error body
//! - **[`validation`]**: explicit DTO rule helpers producing `{field, constraint}` failures
//! - **[`extractors`]**: `ValidatedJson`, `IdPath` and `PageQuery`
//! - **[`http`]**: security headers, client IP resolution, per-IP rate limiting
//! - **[`server`]**: router assembly, health checks, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{Environment, app_info, server::ServerConfig};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! let router = create_router::<ApiDoc>(Router::new(), Environment::Development)
//!     .merge(health_router(app_info!()));
//!
//! create_production_app(router, &ServerConfig::default(), timeout, async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;
pub mod validation;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, ReadyResponse, ShutdownCoordinator, close_pool,
    create_production_app, create_router, health_router, run_health_checks, shutdown_signal,
};

// Re-export HTTP middleware
pub use http::{IpRateLimiter, client_ip, extract_ip_from_headers, rate_limit, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{IdPath, PageQuery, ValidatedJson};

pub use validation::FieldViolation;
