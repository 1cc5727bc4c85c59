use axum::{Router, middleware};
use axum_helpers::api_key_auth_middleware;
use domain_products::{ProductService, handlers};

/// Products subtree, gated by the shared API key.
///
/// The auth layer wraps the whole subtree, so a rejected request never
/// reaches body parsing or the store.
pub fn router(state: &crate::state::AppState) -> Router {
    let service = ProductService::new(state.products.clone());

    handlers::router(service).layer(middleware::from_fn_with_state(
        state.config.api_key.clone(),
        api_key_auth_middleware,
    ))
}
