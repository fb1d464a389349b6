//! Image search provider trait

use async_trait::async_trait;

use crate::{ImageSearchError, Photo};

/// Trait for image search providers
#[async_trait]
pub trait ImageSearchProvider: Send + Sync {
    /// Fetch one random photo matching the query
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, no photo matches, or the
    /// response lacks a display URL.
    async fn random_photo(&self, query: &str) -> Result<Photo, ImageSearchError>;

    /// Get the provider name (e.g., "unsplash")
    fn provider_name(&self) -> &'static str;
}
