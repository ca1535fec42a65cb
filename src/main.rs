//! META-AI backend server
//!
//! This is the main entry point for the application.

use anyhow::Result;
use meta_ai_backend::{
    config,
    network::HttpClient,
    providers::ProviderRegistry,
    web::{create_router, AppState},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    info!("Starting META-AI backend v{}", meta_ai_backend::VERSION);

    // Load configuration
    let settings = config::load()?;
    settings.validate()?;
    info!(
        "Using Gemini model {} at {}",
        settings.gemini.model, settings.gemini.base_url
    );

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;
    info!("HTTP client initialized");

    // Wire providers
    let registry = ProviderRegistry::from_settings(&settings, client);

    let addr = settings.server.socket_addr()?;

    // Create application state and router
    let state = AppState::new(settings, registry);
    let app = create_router(state)?;

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
