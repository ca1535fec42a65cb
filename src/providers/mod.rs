//! AI provider module
//!
//! Defines the Provider trait and a registry of wired providers.

mod gemini;
mod registry;
mod traits;

pub use gemini::GeminiProvider;
pub use registry::ProviderRegistry;
pub use traits::*;
