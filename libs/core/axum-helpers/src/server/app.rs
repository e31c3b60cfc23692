use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use axum::{Router, middleware};
use core_config::{Environment, server::ServerConfig};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{not_found, panic_response};
use crate::http::security::security_headers;

/// Assembles the public router around the API routes.
///
/// - Swagger UI at `/swagger-ui`, document at `/api-docs/openapi.json`
/// - `apis` nested under `/api`
/// - 404 `NF_001` fallback
/// - request tracing, security headers and panic recovery (500 `GEN_001`)
///
/// Health endpoints are merged by the app with [`super::health_router`].
///
/// # Example
/// ```ignore
/// let api_routes = Router::new()
///     .nest("/materials", domain_materials::handlers::router(materials))
///     .nest("/users", domain_users::handlers::router(users));
///
/// let router = create_router::<ApiDoc>(api_routes, Environment::from_env());
/// ```
pub fn create_router<T>(apis: Router, environment: Environment) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn_with_state(environment, security_headers))
}

/// Serves `router` until SIGINT/SIGTERM, then runs `cleanup` with at most
/// `shutdown_timeout` to finish.
///
/// The server is started with connect info so middleware can fall back to
/// the peer address for the client IP.
///
/// # Example
/// ```ignore
/// let cleanup = async move {
///     close_pool(db).await;
/// };
///
/// create_production_app(router, &config.server, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (coordinator, _rx) = ShutdownCoordinator::new();
    let shutdown_handle = coordinator.clone();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        shutdown_handle.wait_for_signal().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed successfully"),
            Err(_) => warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    });

    let serve_result = axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move { coordinator.wait_for_signal().await })
    .await
    .inspect_err(|e| {
        tracing::error!("Server encountered an error: {:?}", e);
    });

    if let Err(e) = cleanup_handle.await {
        warn!("Cleanup task did not finish: {}", e);
    }

    serve_result
}
