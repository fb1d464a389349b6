//! Zippopotam.us client
//!
//! Client for the Zippopotam.us postal code API (<https://www.zippopotam.us>).
//! Unknown postal codes answer with `404` and an empty JSON object.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::{
    config::GeocodingConfig, error::GeocodingError, models::PostalPlace,
    provider::GeocodingClient,
};

/// Zippopotam.us response structures
mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct PostalCodeResponse {
        #[serde(rename = "post code", default)]
        pub post_code: Option<String>,
        #[serde(default)]
        pub places: Vec<Place>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Place {
        #[serde(rename = "place name")]
        pub place_name: String,
        #[serde(default)]
        pub state: Option<String>,
        #[serde(rename = "state abbreviation", default)]
        pub state_abbreviation: Option<String>,
        pub latitude: String,
        pub longitude: String,
    }
}

/// Zippopotam.us API client
#[derive(Debug)]
pub struct ZippopotamClient {
    client: Client,
    base_url: Url,
    country: String,
}

impl ZippopotamClient {
    /// Create a new Zippopotam.us client
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot be created.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodingError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| GeocodingError::ConfigurationError(format!("invalid base_url: {e}")))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            country: config.country.trim().to_lowercase(),
        })
    }

    /// Build the lookup URL, percent-encoding the postal code as one path segment
    fn build_lookup_url(&self, postal_code: &str) -> Result<Url, GeocodingError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                GeocodingError::ConfigurationError("base_url cannot be a base".to_string())
            })?
            .pop_if_empty()
            .push(&self.country)
            .push(postal_code);
        Ok(url)
    }

    /// Take the first place from the response
    fn first_place(
        response: api::PostalCodeResponse,
        postal_code: &str,
    ) -> Result<PostalPlace, GeocodingError> {
        let post_code = response.post_code.unwrap_or_else(|| postal_code.to_string());
        let place = response
            .places
            .into_iter()
            .next()
            .ok_or_else(|| GeocodingError::NoResults {
                postal_code: postal_code.to_string(),
            })?;

        Ok(PostalPlace {
            postal_code: post_code,
            place_name: place.place_name,
            state: place.state,
            state_abbreviation: place.state_abbreviation,
            latitude: place.latitude,
            longitude: place.longitude,
        })
    }
}

#[async_trait]
impl GeocodingClient for ZippopotamClient {
    #[instrument(skip(self), fields(provider = "zippopotam"))]
    async fn lookup_postal_code(&self, postal_code: &str) -> Result<PostalPlace, GeocodingError> {
        let postal_code = postal_code.trim();
        if postal_code.is_empty() {
            return Err(GeocodingError::InvalidQuery(
                "Postal code cannot be empty".to_string(),
            ));
        }

        let url = self.build_lookup_url(postal_code)?;
        debug!(url = %url, "Sending postal code lookup");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_connect() {
                GeocodingError::ConnectionFailed(e.to_string())
            } else {
                GeocodingError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        debug!(status = %status, "Received postal code lookup response");

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GeocodingError::NotFound(postal_code.to_string()));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodingError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(GeocodingError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: api::PostalCodeResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        Self::first_place(api_response, postal_code)
    }
}
