//! Shared application state.

use std::sync::Arc;

use crate::storage::AccountStore;

/// State handed to every handler. Cloning is cheap; the store is shared.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AccountStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }
}
