//! HTTP API server

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::store::CustomerStore;

pub mod handlers;
pub mod state;

pub use handlers::ApiError;
pub use state::AppState;

/// Root path of the customer resource
pub const CUSTOMER_PATH: &str = "/api/v1/customer";

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(CUSTOMER_PATH, post(handlers::create_customer))
        .route(
            &format!("{}/", CUSTOMER_PATH),
            post(handlers::create_customer),
        )
        .route(
            &format!("{}/:id", CUSTOMER_PATH),
            get(handlers::get_customer)
                .put(handlers::update_customer)
                .delete(handlers::delete_customer),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper wiring a router straight onto a store
pub fn create_store_router(store: Arc<dyn CustomerStore>) -> Router {
    create_router(AppState::new(store))
}
