use axum::http::{HeaderValue, Method, header};
use core_config::env_optional;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates a CORS layer for the given origins.
///
/// Methods GET, POST, PUT, DELETE, OPTIONS; headers Content-Type, Accept and
/// the API key header; 1 hour max age.
pub fn cors_layer(allowed_origins: Vec<HeaderValue>, api_key_header: header::HeaderName) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, api_key_header])
        .max_age(Duration::from_secs(3600))
}

/// Parses the comma-separated `CORS_ALLOWED_ORIGIN` variable.
///
/// Returns `Ok(None)` when the variable is unset so that same-origin
/// deployments need no configuration. A set but empty or malformed value
/// is a startup error.
pub fn allowed_origins_from_env() -> io::Result<Option<Vec<HeaderValue>>> {
    let Some(origins_str) = env_optional("CORS_ALLOWED_ORIGIN") else {
        return Ok(None);
    };

    let allowed_origins: Vec<HeaderValue> = origins_str
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    if allowed_origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }

    tracing::info!("CORS configured with allowed origins: {}", origins_str);
    Ok(Some(allowed_origins))
}

/// [`cors_layer`] built from `CORS_ALLOWED_ORIGIN`, if set.
pub fn cors_layer_from_env(api_key_header: header::HeaderName) -> io::Result<Option<CorsLayer>> {
    Ok(allowed_origins_from_env()?.map(|origins| cors_layer(origins, api_key_header)))
}
