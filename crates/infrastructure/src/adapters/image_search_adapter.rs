//! Image search adapter - Implements ImageSearchPort using integration_imagesearch

use application::error::ApplicationError;
use application::ports::ImageSearchPort;
use async_trait::async_trait;
use integration_imagesearch::{
    ImageSearchConfig, ImageSearchError, ImageSearchProvider, UnsplashClient,
};
use tracing::{debug, instrument};

/// Adapter for landmark photos from Unsplash
pub struct ImageSearchAdapter {
    client: UnsplashClient,
}

impl std::fmt::Debug for ImageSearchAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageSearchAdapter")
            .field("provider", &self.client.provider_name())
            .finish_non_exhaustive()
    }
}

impl ImageSearchAdapter {
    /// Create an adapter from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if no access key is configured or the HTTP client
    /// fails to initialize.
    pub fn new(config: &ImageSearchConfig) -> Result<Self, ApplicationError> {
        let client = UnsplashClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Build the adapter only when image search is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: &ImageSearchConfig) -> Result<Option<Self>, ApplicationError> {
        if config.is_enabled() {
            Self::new(config).map(Some)
        } else {
            Ok(None)
        }
    }

    fn map_error(err: ImageSearchError) -> ApplicationError {
        match err {
            ImageSearchError::ConfigurationError(e) => ApplicationError::Configuration(e),
            ImageSearchError::ParseError(e) => ApplicationError::MalformedResponse(e),
            other => ApplicationError::Internal(format!("Image search failed: {other}")),
        }
    }
}

#[async_trait]
impl ImageSearchPort for ImageSearchAdapter {
    #[instrument(skip(self))]
    async fn random_photo(&self, query: &str) -> Result<String, ApplicationError> {
        let photo = self
            .client
            .random_photo(query)
            .await
            .map_err(Self::map_error)?;

        debug!(photo_id = %photo.id, "Found landmark photo");
        Ok(photo.regular_url)
    }
}
