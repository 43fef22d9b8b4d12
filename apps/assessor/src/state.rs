use std::sync::Arc;

use crate::llm_client::ChatModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one model client for the process. Read-only after startup.
    pub llm: Arc<dyn ChatModel>,
}
