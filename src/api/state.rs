//! API server state

use std::sync::Arc;

use crate::store::{create_store, CustomerStore, StoreConfig};

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Customer store chosen at startup
    pub store: Arc<dyn CustomerStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    /// Create state with the store backend named in config
    pub fn from_config(config: StoreConfig) -> Self {
        Self::new(Arc::from(create_store(config)))
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }
}
