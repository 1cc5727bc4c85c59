pub mod codes;
pub mod handlers;
pub mod messages;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
///
/// ```json
/// { "error": "Product not found" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Application error type that can be converted to HTTP responses.
///
/// This is the terminal stage of request handling: handlers and middleware
/// return an `AppError` (or a domain error convertible into one) and
/// `IntoResponse` maps it to a status code and an [`ErrorResponse`] body.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Path extraction error: {0}")]
    PathExtractorRejection(#[from] PathRejection),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    /// HTTP status this error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::SerdeJson(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::JsonExtractorRejection(e) => e.status(),
            AppError::QueryExtractorRejection(e) => e.status(),
            AppError::PathExtractorRejection(e) => e.status(),
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::SerdeJson(_) => ErrorCode::SerdeJsonError,
            AppError::JsonExtractorRejection(_) => ErrorCode::InvalidJson,
            AppError::QueryExtractorRejection(_) => ErrorCode::InvalidQuery,
            AppError::PathExtractorRejection(_) => ErrorCode::InvalidPath,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::Unauthorized(_) => ErrorCode::Unauthorized,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
        }
    }

    /// Message placed in the response body.
    ///
    /// Serialization failures never leak their detail; an internal error
    /// without a message falls back to "Internal Server Error".
    pub fn client_message(&self) -> String {
        match self {
            AppError::SerdeJson(_) => messages::INTERNAL_SERVER_ERROR.to_string(),
            AppError::JsonExtractorRejection(e) => e.body_text(),
            AppError::QueryExtractorRejection(e) => e.body_text(),
            AppError::PathExtractorRejection(e) => e.body_text(),
            AppError::BadRequest(msg) | AppError::Unauthorized(msg) | AppError::NotFound(msg) => {
                msg.clone()
            }
            AppError::InternalServerError(msg) if msg.trim().is_empty() => {
                messages::INTERNAL_SERVER_ERROR.to_string()
            }
            AppError::InternalServerError(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();

        if status.is_server_error() {
            tracing::error!(
                error_code = code.code(),
                status = status.as_u16(),
                "Request failed: {}",
                self
            );
        } else {
            tracing::info!(
                error_code = code.code(),
                status = status.as_u16(),
                "Request rejected: {}",
                self
            );
        }

        (
            status,
            Json(ErrorResponse {
                error: self.client_message(),
            }),
        )
            .into_response()
    }
}

/// Helper function to create error responses outside the `AppError` path,
/// e.g. router fallbacks and the panic handler.
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(StatusCode::NOT_FOUND, "Nothing here", ErrorCode::RouteNotFound);
/// ```
pub fn error_response(status: StatusCode, message: &str, error_code: ErrorCode) -> Response {
    tracing::info!(
        error_code = error_code.code(),
        status = status.as_u16(),
        "{}",
        message
    );

    let body = Json(ErrorResponse {
        error: message.to_string(),
    });

    (status, body).into_response()
}
