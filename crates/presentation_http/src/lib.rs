//! ZipWeather HTTP presentation layer
//!
//! Serves the lookup page, the HTML fragment it swaps in, and a JSON API.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::SecurityHeadersLayer;
pub use routes::create_router;
pub use state::AppState;
