use std::sync::Arc;

use crate::config::Config;
use crate::fixtures::service::FixtureStore;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation client. `GeminiClient` in production; swapped for a scripted one in tests.
    pub generator: Arc<dyn TextGenerator>,
    /// Fixture table, built once at startup and never mutated.
    pub fixtures: Arc<FixtureStore>,
    pub config: Config,
}
