//! Lenient query string extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Extracts query parameters into `T`, keeping the first value of a
/// repeated key.
///
/// Every value is handed to `T` as a string, so fields should be
/// `String` or `Option<String>` and interpreted by the caller. Invalid
/// percent-encoding is decoded lossily rather than rejected. Failures are
/// returned as [`AppError`] so they share the standard error envelope.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::get};
/// use axum_helpers::extractors::QueryParams;
///
/// #[derive(serde::Deserialize)]
/// struct Search {
///     name: Option<String>,
/// }
///
/// async fn search(QueryParams(query): QueryParams<Search>) -> String {
///     query.name.unwrap_or_default()
/// }
///
/// let app = Router::new().route("/search", get(search));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)?;

        let mut params = Map::new();
        for (key, value) in pairs {
            params.entry(key).or_insert(Value::String(value));
        }

        serde_json::from_value(Value::Object(params))
            .map(QueryParams)
            .map_err(|e| AppError::BadRequest(format!("Invalid query string: {e}")))
    }
}
