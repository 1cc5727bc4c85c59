//! Application state management.
//!
//! The state owns the configuration and the product repository. Cloning is
//! cheap: the repository shares its store through an `Arc`.

use domain_products::InMemoryProductRepository;

/// Shared application state.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Process-local product store; contents are lost on restart
    pub products: InMemoryProductRepository,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config,
            products: InMemoryProductRepository::new(),
        }
    }
}
