//! Location image lookup
//!
//! Finds a landmark photo for a place. The photo is decoration: every
//! failure is logged and reported as "no image".

use std::sync::Arc;

use domain::entities::Place;
use tracing::{debug, instrument, warn};

use crate::ports::ImageSearchPort;

/// Resolves an optional photo URL for a place
#[derive(Clone, Default)]
pub struct LocationImageService {
    search: Option<Arc<dyn ImageSearchPort>>,
}

impl std::fmt::Debug for LocationImageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationImageService")
            .field("search", &self.search.is_some())
            .finish()
    }
}

impl LocationImageService {
    /// Create a service backed by an image search port
    #[must_use]
    pub fn new(search: Arc<dyn ImageSearchPort>) -> Self {
        Self {
            search: Some(search),
        }
    }

    /// Create a service that never finds an image
    #[must_use]
    pub fn disabled() -> Self {
        Self { search: None }
    }

    /// Whether an image search backend is configured
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.search.is_some()
    }

    /// Build the search query for a place
    #[must_use]
    pub fn query_for(place: &Place) -> String {
        format!("{} landmark", place.display_name())
    }

    /// Find a photo URL for the place
    ///
    /// Issues at most one request and never fails.
    #[instrument(skip(self), fields(place = %place.display_name()))]
    pub async fn find_image(&self, place: &Place) -> Option<String> {
        let Some(search) = &self.search else {
            debug!("Image search not configured");
            return None;
        };

        let query = Self::query_for(place);
        match search.random_photo(&query).await {
            Ok(url) if !url.trim().is_empty() => {
                debug!(url = %url, "Found location image");
                Some(url)
            },
            Ok(_) => {
                warn!(query = %query, "Image search returned an empty URL");
                None
            },
            Err(e) => {
                warn!(error = %e, query = %query, "Image search failed, continuing without image");
                None
            },
        }
    }
}
