//! Provider registry

use super::gemini::GeminiProvider;
use super::traits::Provider;
use crate::config::Settings;
use crate::network::HttpClient;
use std::sync::Arc;
use tracing::{info, warn};

/// Registry of wired providers, kept in registration order
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn Provider>>,
}

impl ProviderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry of providers wired for this deployment
    pub fn from_settings(settings: &Settings, client: HttpClient) -> Self {
        let mut registry = Self::new();

        if settings.gemini.api_key.is_empty() {
            warn!("No Gemini API key configured; set GEMINI_API_KEY");
        }
        registry.register(Arc::new(GeminiProvider::new(client, settings.gemini.clone())));

        info!("Registered providers: {}", registry.names().join(", "));
        registry
    }

    /// Register a provider, replacing any provider with the same name
    pub fn register(&mut self, provider: Arc<dyn Provider>) {
        let name = provider.name().to_string();
        match self.providers.iter().position(|p| p.name() == name) {
            Some(idx) => self.providers[idx] = provider,
            None => self.providers.push(provider),
        }
    }

    /// Get a provider by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Provider>> {
        self.providers.iter().find(|p| p.name() == name)
    }

    /// All providers in registration order
    pub fn all(&self) -> &[Arc<dyn Provider>] {
        &self.providers
    }

    /// Provider names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
