//! Shared state handed to every HTTP handler.

use std::sync::Arc;

use crate::server::service::species_finder::SpeciesFinder;

/// Application state cloned into each request
#[derive(Clone)]
pub struct AppState {
    /// Resolver shared by all requests
    pub species_finder: Arc<SpeciesFinder>,
}
