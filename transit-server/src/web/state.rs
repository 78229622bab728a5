//! Application state for the web layer.

use std::sync::Arc;

use crate::adapter::TransitAdapter;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Transit query adapter
    pub adapter: Arc<TransitAdapter>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(adapter: TransitAdapter) -> Self {
        Self {
            adapter: Arc::new(adapter),
        }
    }
}
