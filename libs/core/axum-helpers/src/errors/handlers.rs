use std::any::Any;

use axum::{http::StatusCode, response::Response};

use super::{ErrorCode, error_response, messages};

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        messages::ROUTE_NOT_FOUND,
        ErrorCode::RouteNotFound,
    )
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        messages::METHOD_NOT_ALLOWED,
        ErrorCode::MethodNotAllowed,
    )
}

/// Renders a caught handler panic as a generic 500.
///
/// Pass to `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    tracing::error!(
        error_code = ErrorCode::Panic.code(),
        panic = detail,
        "Handler panicked"
    );

    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        messages::INTERNAL_SERVER_ERROR,
        ErrorCode::Panic,
    )
}
