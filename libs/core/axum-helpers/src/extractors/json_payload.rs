//! Untyped JSON body extractor.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request, rejection::JsonRejection};
use serde_json::Value;

/// Extracts the request body as a raw [`serde_json::Value`].
///
/// Type checking is left to the handler so that a wrongly shaped payload can
/// be reported with a domain-specific message. A request that does not
/// declare a JSON content type carries no payload and yields
/// [`Value::Null`]. Syntactically invalid JSON is rejected with the parser's
/// message through [`AppError::JsonExtractorRejection`].
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::post};
/// use axum_helpers::extractors::JsonPayload;
///
/// async fn create(JsonPayload(payload): JsonPayload) -> String {
///     format!("received {payload}")
/// }
///
/// let app = Router::new().route("/items", post(create));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JsonPayload(pub Value);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonPayload(value)),
            Err(JsonRejection::MissingJsonContentType(_)) => {
                tracing::debug!("Request body is not JSON, treating payload as absent");
                Ok(JsonPayload(Value::Null))
            }
            Err(rejection) => Err(AppError::from(rejection)),
        }
    }
}
