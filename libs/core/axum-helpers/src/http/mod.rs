//! HTTP middleware: security headers, client IP resolution and per-IP
//! rate limiting.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{IpRateLimiter, rate_limit, security_headers};
//!
//! let limiter = IpRateLimiter::new(&config.rate_limit)?;
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn_with_state(limiter, rate_limit))
//!     .layer(axum::middleware::from_fn_with_state(environment, security_headers));
//! ```

pub mod client_ip;
pub mod rate_limit;
pub mod security;

pub use client_ip::{client_ip, extract_ip_from_headers};
pub use rate_limit::{IpRateLimiter, rate_limit};
pub use security::security_headers;
