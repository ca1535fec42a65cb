//! META-AI backend: relays search queries to a generative-AI provider
//!
//! A query arrives over HTTP, is forwarded to each registered provider
//! (currently Google Gemini), and every outcome, success or failure, is
//! returned as data inside a JSON envelope.

pub mod config;
pub mod network;
pub mod providers;
pub mod results;
pub mod search;
pub mod web;

pub use config::Settings;
pub use providers::{Provider, ProviderRegistry};
pub use results::{ProviderResult, SearchResponse, Source};
pub use search::Search;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
