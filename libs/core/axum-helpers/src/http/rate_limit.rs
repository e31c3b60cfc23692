use std::net::{IpAddr, Ipv4Addr};
use std::num::NonZeroU32;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use core_config::{ConfigError, rate_limit::RateLimitConfig};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

use super::client_ip::client_ip;
use crate::errors::{ErrorCode, ErrorResponse};

/// Per-client-IP request limiter backed by `governor`.
///
/// Each IP may burst up to `max_requests` and regains one request every
/// `window / max_requests`. Requests whose IP cannot be determined share
/// a single bucket. The IP comes from [`super::client_ip`], so the limit
/// is only as trustworthy as the proxy setting `X-Forwarded-For`.
#[derive(Clone)]
pub struct IpRateLimiter {
    limiter: Arc<DefaultKeyedRateLimiter<IpAddr>>,
    status: StatusCode,
    message: Arc<str>,
}

impl IpRateLimiter {
    pub fn new(config: &RateLimitConfig) -> Result<Self, ConfigError> {
        let burst = NonZeroU32::new(config.max_requests).ok_or_else(|| ConfigError::InvalidValue {
            key: "RATE_LIMIT_MAX".to_string(),
            details: "must be greater than zero".to_string(),
        })?;

        let quota = Quota::with_period(config.window / config.max_requests)
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "RATE_LIMIT_WINDOW_MINUTES".to_string(),
                details: "must be greater than zero".to_string(),
            })?
            .allow_burst(burst);

        let status =
            StatusCode::from_u16(config.status_code).map_err(|e| ConfigError::InvalidValue {
                key: "RATE_LIMIT_STATUS_CODE".to_string(),
                details: e.to_string(),
            })?;

        Ok(Self {
            limiter: Arc::new(RateLimiter::keyed(quota)),
            status,
            message: Arc::from(config.message.as_str()),
        })
    }

    /// Consumes one request from `ip`'s budget; `false` when exhausted.
    pub fn check(&self, ip: IpAddr) -> bool {
        self.limiter.check_key(&ip).is_ok()
    }

    /// Drops state for clients whose budget has fully replenished.
    pub fn retain_recent(&self) {
        self.limiter.retain_recent();
    }

    fn rejection(&self) -> Response {
        let body = ErrorResponse::new(self.message.as_ref(), ErrorCode::RateLimited);
        (self.status, Json(body)).into_response()
    }
}

/// Rejects requests over budget with the configured status and
/// `{"error": <message>, "code": "RATE_001"}`.
pub async fn rate_limit(
    State(limiter): State<IpRateLimiter>,
    request: Request,
    next: Next,
) -> Response {
    let ip = client_ip(&request).unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    if !limiter.check(ip) {
        tracing::warn!(client_ip = %ip, error_code = %ErrorCode::RateLimited, "Rate limit exceeded");
        return limiter.rejection();
    }

    next.run(request).await
}
