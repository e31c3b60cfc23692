use axum::response::Response;

use super::{ErrorCode, error_response};

/// Fallback for unknown routes: 404 with `NF_001`.
pub async fn not_found() -> Response {
    error_response(ErrorCode::NotFound, "Route not found")
}

/// Converts a panic caught by `CatchPanicLayer` into a 500 `GEN_001` body.
pub fn panic_response(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(error_code = %ErrorCode::InternalError, "Handler panicked: {}", detail);

    error_response(
        ErrorCode::InternalError,
        ErrorCode::InternalError.default_message(),
    )
}
