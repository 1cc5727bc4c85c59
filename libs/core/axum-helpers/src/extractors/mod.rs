//! Custom extractors for Axum handlers.
//!
//! Extractor failures are returned as [`AppError`](crate::errors::AppError)
//! so they share the standard error envelope.

pub mod id_path;
pub mod json_payload;
pub mod query_params;

pub use id_path::IdPath;
pub use json_payload::JsonPayload;
pub use query_params::QueryParams;
