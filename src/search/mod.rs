//! Search orchestration module
//!
//! Sends a query to the registered providers and wraps their results.

mod executor;

pub use executor::Search;
