use crate::{env_or_default, env_parse_or_default, ConfigError, FromEnv};
use std::time::Duration;

pub const DEFAULT_WINDOW_MINUTES: u64 = 15;
pub const DEFAULT_MAX_REQUESTS: u32 = 100;
pub const DEFAULT_STATUS_CODE: u16 = 429;
pub const DEFAULT_MESSAGE: &str = "Too many requests, please try again later.";

/// Per-client request budget enforced by the rate limiting middleware.
///
/// A client may issue at most `max_requests` requests per `window`; further
/// requests are answered with `status_code` and `message` until the budget
/// replenishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub window: Duration,
    pub max_requests: u32,
    pub status_code: u16,
    pub message: String,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window: Duration::from_secs(DEFAULT_WINDOW_MINUTES * 60),
            max_requests: DEFAULT_MAX_REQUESTS,
            status_code: DEFAULT_STATUS_CODE,
            message: DEFAULT_MESSAGE.to_string(),
        }
    }
}

impl FromEnv for RateLimitConfig {
    /// Environment variables:
    /// - `RATE_LIMIT_WINDOW_MINUTES` (default: 15)
    /// - `RATE_LIMIT_MAX` (default: 100)
    /// - `RATE_LIMIT_STATUS_CODE` (default: 429)
    /// - `RATE_LIMIT_MESSAGE` (default: "Too many requests, please try again later.")
    fn from_env() -> Result<Self, ConfigError> {
        let window_minutes: u64 = env_parse_or_default(
            "RATE_LIMIT_WINDOW_MINUTES",
            &DEFAULT_WINDOW_MINUTES.to_string(),
        )?;
        if window_minutes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "RATE_LIMIT_WINDOW_MINUTES".to_string(),
                details: "must be greater than zero".to_string(),
            });
        }

        let max_requests: u32 =
            env_parse_or_default("RATE_LIMIT_MAX", &DEFAULT_MAX_REQUESTS.to_string())?;
        if max_requests == 0 {
            return Err(ConfigError::InvalidValue {
                key: "RATE_LIMIT_MAX".to_string(),
                details: "must be greater than zero".to_string(),
            });
        }

        let status_code: u16 =
            env_parse_or_default("RATE_LIMIT_STATUS_CODE", &DEFAULT_STATUS_CODE.to_string())?;
        if !(100..=599).contains(&status_code) {
            return Err(ConfigError::InvalidValue {
                key: "RATE_LIMIT_STATUS_CODE".to_string(),
                details: format!("{} is not an HTTP status code", status_code),
            });
        }

        Ok(Self {
            window: Duration::from_secs(window_minutes * 60),
            max_requests,
            status_code,
            message: env_or_default("RATE_LIMIT_MESSAGE", DEFAULT_MESSAGE),
        })
    }
}
