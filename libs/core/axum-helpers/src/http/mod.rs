//! HTTP middleware module.
//!
//! This module provides HTTP-level middleware for:
//! - CORS configuration
//! - Security headers
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{cors_layer_from_env, security_headers};
//!
//! let mut app = Router::new().layer(axum::middleware::from_fn(security_headers));
//! if let Some(cors) = cors_layer_from_env(api_key_header)? {
//!     app = app.layer(cors);
//! }
//! ```

pub mod cors;
pub mod security;

// Re-export commonly used functions
pub use cors::{allowed_origins_from_env, cors_layer, cors_layer_from_env};
pub use security::security_headers;
