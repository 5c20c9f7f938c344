mod coaching;
mod config;
mod errors;
mod fixtures;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::fixtures::service::FixtureStore;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", "sideline_api", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sideline API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize generation client
    let gemini = GeminiClient::new(
        config.gemini_base_url.clone(),
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.gemini_fallback_models.clone(),
    )?;
    info!(
        "Gemini client initialized (model: {}, fallbacks: {:?})",
        gemini.primary_model(),
        config.gemini_fallback_models
    );
    if !gemini.has_credential() {
        warn!("GEMINI_API_KEY not set; plan requests must supply their own api_key");
    }

    // Fixture table is built once and shared read-only
    let fixtures = Arc::new(FixtureStore::seeded());
    info!("Fixture store loaded ({} sports)", fixtures.sport_names().count());

    let state = AppState {
        generator: Arc::new(gemini),
        fixtures,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
