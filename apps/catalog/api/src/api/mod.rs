use axum::Router;
use axum_helpers::{create_router, health_router};
use tower_http::cors::CorsLayer;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod products;
pub mod root;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Full application: greeting, health, docs and API routes behind the
/// shared middleware stack.
pub fn app(state: &AppState, cors: Option<CorsLayer>) -> Router {
    let root = root::router().merge(health_router(state.config.app));
    create_router::<ApiDoc>(root, routes(state), cors)
}
