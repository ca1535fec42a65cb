//! HTTP networking module
//!
//! Provides the outbound HTTP client used by providers.

mod client;

pub use client::{HttpClient, HttpResponse};
