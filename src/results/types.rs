//! Result type definitions

use serde::{Deserialize, Serialize};

/// Prefix placed in front of the error message in a failed result's `text`
pub const ERROR_MARKER: &str = "Error: ";

/// A web source cited by a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
}

impl Source {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Normalized outcome of a single provider call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderResult {
    /// Provider identifier, e.g. "gemini"
    pub provider: String,
    /// The answer, or the error message behind [`ERROR_MARKER`]
    pub text: String,
    /// Cited sources, usually empty
    #[serde(default)]
    pub sources: Vec<Source>,
    /// Error message when the call failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Whether the call succeeded
    pub success: bool,
    /// Wall-clock time spent on the call
    pub response_time_ms: u64,
}

impl ProviderResult {
    /// Create a successful result
    pub fn success(provider: impl Into<String>, text: impl Into<String>, response_time_ms: u64) -> Self {
        Self {
            provider: provider.into(),
            text: text.into(),
            sources: vec![],
            error: None,
            success: true,
            response_time_ms,
        }
    }

    /// Create a failed result
    pub fn failure(provider: impl Into<String>, error: impl Into<String>, response_time_ms: u64) -> Self {
        let mut error = error.into();
        if error.is_empty() {
            error = "unknown error".to_string();
        }

        Self {
            provider: provider.into(),
            text: format!("{}{}", ERROR_MARKER, error),
            sources: vec![],
            error: Some(error),
            success: false,
            response_time_ms,
        }
    }

    /// Attach sources to the result
    pub fn with_sources(mut self, sources: Vec<Source>) -> Self {
        self.sources = sources;
        self
    }
}

/// Envelope returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// The query as received
    pub query: String,
    /// One result per provider invoked
    pub results: Vec<ProviderResult>,
    /// Always equal to `results.len()`
    pub total_providers: usize,
    /// Milliseconds since the Unix epoch at construction time
    pub timestamp: i64,
}

impl SearchResponse {
    /// Wrap provider results, stamping the current time
    pub fn new(query: impl Into<String>, results: Vec<ProviderResult>) -> Self {
        Self {
            query: query.into(),
            total_providers: results.len(),
            results,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Number of providers that answered successfully
    pub fn successful(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }
}
