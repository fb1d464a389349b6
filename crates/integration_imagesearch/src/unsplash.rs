//! Unsplash API client
//!
//! Client for the Unsplash random photo endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::{
    config::ImageSearchConfig, error::ImageSearchError, models::Photo,
    provider::ImageSearchProvider,
};

/// Unsplash API response structures
mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct RandomPhotoResponse {
        pub id: String,
        #[serde(default)]
        pub urls: Option<PhotoUrls>,
    }

    #[derive(Debug, Deserialize)]
    pub struct PhotoUrls {
        #[serde(default)]
        pub regular: Option<String>,
    }
}

/// Unsplash API client
pub struct UnsplashClient {
    client: Client,
    access_key: String,
    base_url: String,
}

impl std::fmt::Debug for UnsplashClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnsplashClient")
            .field("access_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl UnsplashClient {
    /// Create a new Unsplash client
    ///
    /// # Errors
    ///
    /// Returns an error if the access key is missing or HTTP client cannot be created.
    pub fn new(config: &ImageSearchConfig) -> Result<Self, ImageSearchError> {
        let access_key = config
            .access_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ImageSearchError::ConfigurationError("Unsplash access key is required".to_string())
            })?
            .to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ImageSearchError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            access_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn build_url(&self) -> String {
        format!("{}/photos/random", self.base_url)
    }

    /// Convert API response to a photo
    fn convert_photo(
        response: api::RandomPhotoResponse,
        query: &str,
    ) -> Result<Photo, ImageSearchError> {
        let regular_url = response
            .urls
            .and_then(|u| u.regular)
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| {
                ImageSearchError::ParseError(format!("Photo for '{query}' has no regular URL"))
            })?;

        Ok(Photo {
            id: response.id,
            regular_url,
        })
    }
}

#[async_trait]
impl ImageSearchProvider for UnsplashClient {
    #[instrument(skip(self), fields(provider = "unsplash"))]
    async fn random_photo(&self, query: &str) -> Result<Photo, ImageSearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ImageSearchError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }

        let url = self.build_url();
        // The access key travels as a query parameter, keep it out of logs
        debug!(url = %url, query = %query, "Sending Unsplash random photo request");

        let response = self
            .client
            .get(&url)
            .header("Accept-Version", "v1")
            .query(&[("query", query), ("client_id", self.access_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ImageSearchError::ConnectionFailed(e.without_url().to_string())
                } else {
                    ImageSearchError::RequestFailed(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        debug!(status = %status, "Received Unsplash response");

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ImageSearchError::AuthenticationFailed(
                "Invalid Unsplash access key".to_string(),
            ));
        }
        // Unsplash signals an exhausted hourly quota with 403
        if status == reqwest::StatusCode::FORBIDDEN
            || status == reqwest::StatusCode::TOO_MANY_REQUESTS
        {
            return Err(ImageSearchError::RateLimitExceeded);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ImageSearchError::NoResults {
                query: query.to_string(),
            });
        }
        if status.is_server_error() {
            return Err(ImageSearchError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(ImageSearchError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: api::RandomPhotoResponse = response
            .json()
            .await
            .map_err(|e| ImageSearchError::ParseError(e.without_url().to_string()))?;

        let photo = Self::convert_photo(api_response, query)?;
        debug!(photo_id = %photo.id, "Unsplash returned a photo");

        Ok(photo)
    }

    fn provider_name(&self) -> &'static str {
        "unsplash"
    }
}
