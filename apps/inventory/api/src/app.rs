//! Router composition shared by `main` and the tests.

use axum::Router;
use axum_helpers::{IpRateLimiter, create_router, health_router};
use core_config::ConfigError;

use crate::{api, openapi::ApiDoc, state::AppState};

/// Full application router: `/api/*` behind the rate limiter, docs,
/// `/health` and `/ready`.
pub fn build(state: AppState) -> Result<(Router, IpRateLimiter), ConfigError> {
    let limiter = IpRateLimiter::new(&state.config.rate_limit)?;

    let api_routes = api::routes(&state, limiter.clone());
    let router = create_router::<ApiDoc>(api_routes, state.config.environment.clone())
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state));

    Ok((router, limiter))
}
