//! Application state for the vehicle API

use std::sync::Arc;

use vgw_core::VehicleBackend;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    backend: Arc<dyn VehicleBackend>,
}

impl AppState {
    pub fn new(backend: Arc<dyn VehicleBackend>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &Arc<dyn VehicleBackend> {
        &self.backend
    }
}
