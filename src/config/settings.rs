//! Settings structures for the META-AI backend

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use url::Url;

/// Main settings structure, mirrors settings.yml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
    pub gemini: GeminiSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    fn merge_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("GEMINI_API_KEY") {
            self.gemini.api_key = val;
        }
        if let Some(val) = var("GEMINI_API_URL") {
            self.gemini.base_url = val;
        }
        if let Some(val) = var("GEMINI_MODEL") {
            self.gemini.model = val;
        }
        if let Some(val) = var("META_AI_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("META_AI_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Some(val) = var("META_AI_CORS_ORIGIN") {
            self.server.cors_origin = val;
        }
    }

    /// Check the values that would otherwise only fail at request time
    pub fn validate(&self) -> Result<()> {
        self.server.socket_addr()?;
        Url::parse(&self.gemini.base_url)
            .with_context(|| format!("invalid gemini.base_url: {}", self.gemini.base_url))?;
        if let Some(secs) = self.outgoing.request_timeout {
            if !secs.is_finite() || secs <= 0.0 {
                anyhow::bail!("outgoing.request_timeout must be a positive number, got {}", secs);
            }
        }
        if self.gemini.model.trim().is_empty() {
            anyhow::bail!("gemini.model must not be empty");
        }
        Ok(())
    }
}

/// Server settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
    /// Origin allowed by CORS, "*" for any
    pub cors_origin: String,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .bind_address
            .parse()
            .with_context(|| format!("invalid bind address: {}", self.bind_address))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_address: "127.0.0.1".to_string(),
            cors_origin: "http://localhost:3000".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds, none = no timeout
    pub request_timeout: Option<f64>,
    /// Pool max idle connections per host
    pub pool_maxsize: usize,
    /// Proxy for all outgoing requests
    pub proxy: Option<String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: None,
            pool_maxsize: 20,
            proxy: None,
        }
    }
}

/// Gemini provider settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeminiSettings {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL of the models collection
    pub base_url: String,
    /// Model name
    pub model: String,
    /// Text placed before the user's query
    pub prompt_prefix: String,
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            model: "gemini-1.5-flash-latest".to_string(),
            prompt_prefix: "Please provide a comprehensive answer to: ".to_string(),
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }
}
