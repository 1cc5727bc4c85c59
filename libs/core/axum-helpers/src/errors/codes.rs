//! Stable error codes attached to error logs.
//!
//! Responses only carry `{ "error": message }`; the code is a structured
//! `error_code` field on the log event so failures can be grouped in log
//! tooling without parsing messages.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::BadRequest.as_str(), "BAD_REQUEST");
//! assert_eq!(ErrorCode::BadRequest.code(), 1001);
//! ```

/// Error codes, grouped into ranges:
/// - 1000-1999: client errors
/// - 5000-5999: server errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Request input failed validation or is otherwise malformed
    BadRequest,

    /// Request body could not be parsed as JSON
    InvalidJson,

    /// Credentials are missing or do not match
    Unauthorized,

    /// Requested resource does not exist
    NotFound,

    /// No route matches the request path
    RouteNotFound,

    /// Route exists but not for this HTTP method
    MethodNotAllowed,

    /// Query string could not be decoded
    InvalidQuery,

    /// Path parameter could not be decoded
    InvalidPath,

    /// An unexpected internal server error occurred
    InternalError,

    /// A response value failed to serialize
    SerdeJsonError,

    /// A handler panicked
    Panic,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidJson => "INVALID_JSON",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotFound => "NOT_FOUND",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::InvalidPath => "INVALID_PATH",
            Self::InternalError => "INTERNAL_ERROR",
            Self::SerdeJsonError => "SERDE_JSON_ERROR",
            Self::Panic => "PANIC",
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            // Client errors (1000-1999)
            Self::BadRequest => 1001,
            Self::InvalidJson => 1002,
            Self::Unauthorized => 1003,
            Self::NotFound => 1004,
            Self::RouteNotFound => 1005,
            Self::MethodNotAllowed => 1006,
            Self::InvalidQuery => 1007,
            Self::InvalidPath => 1008,

            // Server errors (5000-5999)
            Self::InternalError => 5001,
            Self::SerdeJsonError => 5002,
            Self::Panic => 5003,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
