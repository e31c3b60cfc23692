use axum::{Router, middleware};
use axum_helpers::{IpRateLimiter, rate_limit};

pub mod health;
pub mod materials;
pub mod users;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Every API route shares the per-IP `limiter`.
pub fn routes(state: &crate::state::AppState, limiter: IpRateLimiter) -> Router {
    Router::new()
        .nest("/materials", materials::router(state))
        .nest("/users", users::router(state))
        .layer(middleware::from_fn_with_state(limiter, rate_limit))
}

/// Creates a router with the /ready endpoint that performs actual health checks.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
