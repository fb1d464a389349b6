//! BigDataCloud reverse geocoding client
//!
//! Uses the keyless client-side endpoint
//! (<https://www.bigdatacloud.com/free-api/free-reverse-geocode-to-city-api>).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::{
    config::ReverseGeocodingConfig, error::GeocodingError, models::ReverseGeocode,
    provider::ReverseGeocodingClient,
};

/// BigDataCloud response structures
mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ReverseGeocodeResponse {
        #[serde(default)]
        pub city: Option<String>,
        #[serde(default)]
        pub principal_subdivision: Option<String>,
    }
}

/// BigDataCloud API client
#[derive(Debug)]
pub struct BigDataCloudClient {
    client: Client,
    base_url: String,
    locality_language: String,
}

impl BigDataCloudClient {
    /// Create a new BigDataCloud client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &ReverseGeocodingConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            locality_language: config.locality_language.clone(),
        })
    }

    fn build_url(&self) -> String {
        format!("{}/data/reverse-geocode-client", self.base_url)
    }

    /// Blank strings count as missing
    fn non_blank(value: Option<String>) -> Option<String> {
        value.filter(|v| !v.trim().is_empty())
    }
}

#[async_trait]
impl ReverseGeocodingClient for BigDataCloudClient {
    #[instrument(skip(self), fields(provider = "bigdatacloud"))]
    async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ReverseGeocode, GeocodingError> {
        let url = self.build_url();
        debug!(url = %url, "Sending reverse geocode request");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("localityLanguage", self.locality_language.clone()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    GeocodingError::ConnectionFailed(e.to_string())
                } else {
                    GeocodingError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodingError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(GeocodingError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: api::ReverseGeocodeResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        Ok(ReverseGeocode {
            city: Self::non_blank(api_response.city),
            principal_subdivision: Self::non_blank(api_response.principal_subdivision),
        })
    }
}
