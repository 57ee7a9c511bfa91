use crate::store::UserStore;
use std::sync::Arc;

/// Shared application state
///
/// The store handle is built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: impl UserStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
