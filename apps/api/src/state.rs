use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only: nothing here changes after startup.
#[derive(Clone)]
pub struct AppState {
    /// The inference boundary. `LlmClient` in production.
    pub llm: Arc<dyn CompletionBackend>,
    pub config: Config,
}
