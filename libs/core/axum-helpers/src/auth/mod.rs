//! Shared-secret API key authentication.
//!
//! A placeholder trust mechanism: every request through the middleware must
//! carry a configured header whose value equals a configured key. There are
//! no users, scopes or key rotation.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{ApiKeyConfig, api_key_auth_middleware};
//! use core_config::FromEnv;
//!
//! let config = ApiKeyConfig::from_env()?;
//!
//! let protected = Router::new()
//!     .route("/items", get(handler))
//!     .layer(axum::middleware::from_fn_with_state(config, api_key_auth_middleware));
//! ```

pub mod config;
pub mod middleware;

pub use config::{ApiKeyConfig, DEFAULT_API_KEY_HEADER};
pub use middleware::api_key_auth_middleware;
