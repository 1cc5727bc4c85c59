//! API key configuration, loaded through `core_config::FromEnv`.

use axum::http::HeaderName;
use core_config::{ConfigError, FromEnv, env_or_default, env_required};
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_API_KEY_HEADER: &str = "x-api-key";

/// Shared-secret configuration.
///
/// Loaded from environment variables:
/// - `API_KEY` (required, non-empty) - the shared secret
/// - `API_KEY_HEADER` (optional, default `x-api-key`) - header carrying it
#[derive(Clone)]
pub struct ApiKeyConfig {
    header: HeaderName,
    key: Arc<str>,
}

impl ApiKeyConfig {
    /// Create a config expecting `key` in the default `x-api-key` header.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            header: HeaderName::from_static(DEFAULT_API_KEY_HEADER),
            key: Arc::from(key.into()),
        }
    }

    pub fn with_header(mut self, header: HeaderName) -> Self {
        self.header = header;
        self
    }

    pub fn header(&self) -> &HeaderName {
        &self.header
    }

    /// Exact byte-for-byte comparison against the configured key.
    pub fn matches(&self, candidate: &[u8]) -> bool {
        candidate == self.key.as_bytes()
    }
}

impl fmt::Debug for ApiKeyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyConfig")
            .field("header", &self.header)
            .field("key", &"<redacted>")
            .finish()
    }
}

impl FromEnv for ApiKeyConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let key = env_required("API_KEY")?;
        if key.is_empty() {
            return Err(ConfigError::ParseError {
                key: "API_KEY".to_string(),
                details: "must not be empty".to_string(),
            });
        }

        let header_name = env_or_default("API_KEY_HEADER", DEFAULT_API_KEY_HEADER);
        let header = HeaderName::try_from(header_name.trim()).map_err(|e| {
            ConfigError::ParseError {
                key: "API_KEY_HEADER".to_string(),
                details: e.to_string(),
            }
        })?;

        Ok(Self::new(key).with_header(header))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_config_from_env_defaults_header() {
        temp_env::with_vars(
            [("API_KEY", Some("s3cret")), ("API_KEY_HEADER", None)],
            || {
                let config = ApiKeyConfig::from_env().unwrap();
                assert_eq!(config.header().as_str(), "x-api-key");
                assert!(config.matches(b"s3cret"));
            },
        );
    }

    #[test]
    fn test_api_key_config_custom_header() {
        temp_env::with_vars(
            [("API_KEY", Some("s3cret")), ("API_KEY_HEADER", Some("X-Catalog-Key"))],
            || {
                let config = ApiKeyConfig::from_env().unwrap();
                assert_eq!(config.header().as_str(), "x-catalog-key");
            },
        );
    }

    #[test]
    fn test_api_key_config_requires_key() {
        temp_env::with_var_unset("API_KEY", || {
            let err = ApiKeyConfig::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::MissingEnvVar(_)));
        });

        temp_env::with_var("API_KEY", Some(""), || {
            let err = ApiKeyConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("API_KEY"));
        });
    }

    #[test]
    fn test_api_key_config_rejects_invalid_header() {
        temp_env::with_vars(
            [("API_KEY", Some("s3cret")), ("API_KEY_HEADER", Some("bad header"))],
            || {
                let err = ApiKeyConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("API_KEY_HEADER"));
            },
        );
    }

    #[test]
    fn test_matches_is_exact() {
        let config = ApiKeyConfig::new("s3cret");
        assert!(config.matches(b"s3cret"));
        assert!(!config.matches(b"S3CRET"));
        assert!(!config.matches(b"s3cret "));
        assert!(!config.matches(b""));
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", ApiKeyConfig::new("s3cret"));
        assert!(!rendered.contains("s3cret"));
    }
}
