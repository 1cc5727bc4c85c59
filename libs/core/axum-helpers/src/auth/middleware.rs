use super::config::ApiKeyConfig;
use crate::errors::{AppError, messages};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// API key authentication middleware
///
/// Rejects the request with 401 before any body parsing or handler dispatch
/// unless the configured header carries exactly the configured key.
///
/// # Example
///
/// ```ignore
/// let protected_routes = Router::new()
///     .route("/items", get(list_items))
///     .layer(axum::middleware::from_fn_with_state(
///         api_key_config.clone(),
///         api_key_auth_middleware,
///     ));
/// ```
pub async fn api_key_auth_middleware(
    State(config): State<ApiKeyConfig>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let authorized = request
        .headers()
        .get(config.header())
        .is_some_and(|value| config.matches(value.as_bytes()));

    if !authorized {
        tracing::debug!(
            header = %config.header(),
            path = %request.uri().path(),
            "API key missing or mismatched"
        );
        return Err(AppError::Unauthorized(
            messages::UNAUTHORIZED_API_KEY.to_string(),
        ));
    }

    Ok(next.run(request).await)
}
