//! Application state shared across handlers

use std::sync::Arc;

use application::WeatherLookupService;
use infrastructure::TemplateEngine;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Postal code lookup chain
    pub lookup: Arc<WeatherLookupService>,
    /// Page and fragment templates
    pub templates: TemplateEngine,
}

impl AppState {
    /// Create state from a lookup service and template engine
    #[must_use]
    pub fn new(lookup: WeatherLookupService, templates: TemplateEngine) -> Self {
        Self {
            lookup: Arc::new(lookup),
            templates,
        }
    }
}
