//! Application state management

use database::mongodb::DocumentStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub store: DocumentStore,
}
