//! API server state

use std::sync::Arc;

use crate::store::PermitStore;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Shared permit store, alive for the lifetime of the process
    pub store: Arc<PermitStore>,
}

impl AppState {
    pub fn new(store: Arc<PermitStore>) -> Self {
        Self { store }
    }
}
