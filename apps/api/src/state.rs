use std::sync::Arc;

use crate::advice::AdviceGenerator;
use crate::config::Config;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Pluggable advice backend. Default: LlmAdviceGenerator.
    pub advisor: Arc<dyn AdviceGenerator>,
    pub config: Config,
}
