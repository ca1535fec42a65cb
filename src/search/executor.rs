//! Search execution

use crate::providers::{Provider, ProviderRegistry};
use crate::results::{ProviderResult, SearchResponse};
use futures::future::join_all;
use std::sync::Arc;
use tracing::info;

/// Search executor that sends a query to every registered provider
pub struct Search {
    registry: Arc<ProviderRegistry>,
}

impl Search {
    /// Create a new search executor
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    /// Ask every provider once and wrap the results in an envelope.
    ///
    /// Results keep registration order.
    pub async fn execute(&self, query: &str) -> SearchResponse {
        let providers = self.registry.all();
        info!("Executing search '{}' on {} providers", query, providers.len());

        let results = join_all(providers.iter().map(|p| p.search(query))).await;

        let response = SearchResponse::new(query, results);
        info!(
            "Search finished: {}/{} providers succeeded",
            response.successful(),
            response.total_providers
        );
        response
    }

    /// Ask a single provider, returning its bare result
    pub async fn execute_single(&self, provider: &str, query: &str) -> Option<ProviderResult> {
        let provider: &Arc<dyn Provider> = self.registry.get(provider)?;
        Some(provider.search(query).await)
    }
}
