//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Page and fragment
        .route("/", get(handlers::page::index))
        .route("/weather", get(handlers::weather::weather_fragment))
        // JSON API (v1)
        .route("/v1/weather/{zipcode}", get(handlers::weather::weather_json))
        // Health
        .route("/health", get(handlers::health::health_check))
        // Attach state
        .with_state(state)
}
