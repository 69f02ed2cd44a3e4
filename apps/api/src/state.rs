use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Lookup tables are statics in `catalog`, so only configuration lives here.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState { config }
    }
}
