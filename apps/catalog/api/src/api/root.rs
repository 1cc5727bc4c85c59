use axum::{Router, routing::get};

pub const GREETING: &str = "Welcome to the Product Catalog API";

async fn greeting() -> &'static str {
    GREETING
}

/// Unauthenticated landing route at `/`
pub fn router() -> Router {
    Router::new().route("/", get(greeting))
}
