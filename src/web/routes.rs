//! Route definitions

use super::error::handle_panic;
use super::handlers;
use super::state::AppState;
use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Result<Router> {
    let cors = cors_layer(&state.settings.server.cors_origin)?;

    let api = Router::new()
        .route("/search", post(handlers::search))
        .route("/search/gemini", post(handlers::search_gemini))
        .route("/health", get(handlers::health))
        .route("/test-gemini", get(handlers::test_gemini));

    Ok(Router::new()
        .nest("/api", api)
        // Add middleware
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        // Add state
        .with_state(state))
}

fn cors_layer(origin: &str) -> Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origin == "*" {
        return Ok(layer.allow_origin(Any));
    }

    let origin = HeaderValue::from_str(origin)
        .with_context(|| format!("invalid CORS origin: {}", origin))?;
    Ok(layer.allow_origin(origin))
}
