//! Web server module
//!
//! Provides the JSON HTTP API.

mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use handlers::{SearchRequest, HEALTH_MESSAGE, TEST_QUERY};
pub use routes::create_router;
pub use state::AppState;
