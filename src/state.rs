use crate::navigation::NavigationTable;
use crate::store::LookupStore;
use std::sync::Arc;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LookupStore>,
    pub navigation: Arc<NavigationTable>,
}

impl AppState {
    pub fn new(store: Arc<LookupStore>, navigation: Arc<NavigationTable>) -> Self {
        Self { store, navigation }
    }
}
