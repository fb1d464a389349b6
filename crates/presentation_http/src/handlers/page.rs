//! Lookup page handler

use axum::{extract::State, response::Html};
use tracing::error;

use crate::{error::ApiError, state::AppState};

/// Serve the lookup page
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    state.templates.render_page().map(Html).map_err(|e| {
        error!(error = %e, "Failed to render page");
        ApiError::Internal("Something went wrong".to_string())
    })
}
