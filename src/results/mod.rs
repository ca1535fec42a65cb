//! Result model returned to callers
//!
//! Every provider call, successful or not, is normalized into a
//! [`ProviderResult`]; the search endpoint wraps those in a [`SearchResponse`].

mod types;

pub use types::*;
