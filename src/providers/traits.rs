//! Provider traits and types

use crate::results::ProviderResult;
use async_trait::async_trait;
use thiserror::Error;

/// Why a provider call failed.
///
/// The `Display` text becomes the `error` field of the failed
/// [`ProviderResult`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Upstream answered with a non-success status
    #[error("API returned status: {0}")]
    Status(u16),
    /// Request could not be sent or the body could not be read
    #[error("Request failed: {0}")]
    Transport(String),
    /// Body was not valid JSON
    #[error("Error parsing response: {0}")]
    Parse(String),
    /// JSON was valid but the answer was not where expected
    #[error("unexpected response structure")]
    UnexpectedStructure,
}

/// A generative-AI provider.
///
/// `search` never fails: every error is folded into a `success = false`
/// result, so callers can always relay something.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider identifier, used in results and for lookup
    fn name(&self) -> &str;

    /// Answer a query
    async fn search(&self, query: &str) -> ProviderResult;
}
