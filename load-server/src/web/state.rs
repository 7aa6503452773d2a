//! Application state for the web layer.

use std::sync::Arc;

use crate::service::LoadService;

/// Shared application state.
pub struct AppState<G> {
    /// Load creation and listing
    pub loads: Arc<LoadService<G>>,
}

impl<G> AppState<G> {
    /// Create a new app state.
    pub fn new(loads: LoadService<G>) -> Self {
        Self {
            loads: Arc::new(loads),
        }
    }
}

// Not derived: that would require `G: Clone`.
impl<G> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            loads: Arc::clone(&self.loads),
        }
    }
}
