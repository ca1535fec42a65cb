//! HTTP request handlers

use super::error::ApiError;
use super::state::AppState;
use crate::results::{ProviderResult, SearchResponse};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

/// Fixed liveness message
pub const HEALTH_MESSAGE: &str = "META-AI Backend is running! ✅";

/// Canned query used by the connectivity check
pub const TEST_QUERY: &str = "Say 'Hello from Gemini!'";

const GEMINI: &str = "gemini";

/// Body of the search endpoints
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
}

/// Pull a usable query out of the request body
fn require_query(payload: Result<Json<SearchRequest>, JsonRejection>) -> Result<String, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    match request.query {
        Some(q) if !q.trim().is_empty() => Ok(q),
        _ => Err(ApiError::BadRequest("empty query".to_string())),
    }
}

/// Search all providers and return the envelope
pub async fn search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = require_query(payload)?;
    info!("Received search request: {}", query);

    let response = state.search.execute(&query).await;
    Ok(Json(response))
}

/// Search Gemini only and return its bare result
pub async fn search_gemini(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<ProviderResult>, ApiError> {
    let query = require_query(payload)?;
    info!("Received Gemini-only search request: {}", query);

    gemini(&state, &query).await.map(Json)
}

/// Health check handler
pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}

/// Run a canned query against Gemini
pub async fn test_gemini(State(state): State<AppState>) -> Result<Json<ProviderResult>, ApiError> {
    info!("Testing Gemini API connection");
    gemini(&state, TEST_QUERY).await.map(Json)
}

async fn gemini(state: &AppState, query: &str) -> Result<ProviderResult, ApiError> {
    state
        .search
        .execute_single(GEMINI, query)
        .await
        .ok_or_else(|| ApiError::Internal(format!("provider '{}' is not registered", GEMINI)))
}
