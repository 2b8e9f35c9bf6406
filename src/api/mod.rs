//! HTTP API server

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::store::PermitStore;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/permits",
            get(handlers::list_permits).post(handlers::create_permit),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Convenience helper wiring a fresh store into a router
pub fn create_default_router() -> Router {
    create_router(AppState::new(Arc::new(PermitStore::new())))
}
