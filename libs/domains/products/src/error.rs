use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found")]
    NotFound(String),

    /// The payload failed validation. The detail is for logs only; clients
    /// always see the same generic message.
    #[error("Invalid product data")]
    Validation(String),

    #[error("Missing required query parameter: {0}")]
    MissingQueryParameter(&'static str),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        let message = err.to_string();
        match err {
            ProductError::NotFound(id) => {
                tracing::debug!(product_id = %id, "Product lookup missed");
                AppError::NotFound(message)
            }
            ProductError::Validation(detail) => {
                tracing::debug!(%detail, "Product payload rejected");
                AppError::BadRequest(message)
            }
            ProductError::MissingQueryParameter(_) => AppError::BadRequest(message),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
