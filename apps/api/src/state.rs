use std::sync::Arc;

use crate::ats::catalog::Catalog;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Lexicon, profiles and scoring constants; read-only after startup.
    pub catalog: Arc<Catalog>,
}
