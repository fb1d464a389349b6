//! NWS weather client
//!
//! HTTP client for the National Weather Service API.

use async_trait::async_trait;
use reqwest::{Client, Response, header};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use crate::models::{ForecastResponse, GridPoint, PeriodForecast, PointsResponse};

/// Media type NWS serves its documents as
const GEO_JSON: &str = "application/geo+json";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Forecast URL handed out by the service is not usable
    #[error("Invalid forecast URL: {0}")]
    InvalidUrl(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// NWS API base URL (default: <https://api.weather.gov>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User-Agent sent with every request; NWS rejects anonymous clients
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://api.weather.gov".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("zipweather/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl WeatherConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        Url::parse(&self.base_url).map_err(|e| format!("invalid base_url: {e}"))?;

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }

        Ok(())
    }
}

/// Weather client trait for fetching forecasts
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Resolve coordinates to grid point metadata
    async fn get_point(&self, latitude: f64, longitude: f64) -> Result<GridPoint, WeatherError>;

    /// Fetch the period forecast at a URL taken from grid point metadata
    async fn get_forecast(&self, forecast_url: &str) -> Result<PeriodForecast, WeatherError>;
}

/// NWS HTTP client implementation
#[derive(Debug)]
pub struct NwsClient {
    client: Client,
    config: WeatherConfig,
}

impl NwsClient {
    /// Create a new NWS client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Build the points URL; NWS expects at most four decimals
    fn build_points_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/points/{latitude:.4},{longitude:.4}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Issue a GET for a GeoJSON document and map the status
    async fn get_json(&self, url: &str) -> Result<Response, WeatherError> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, GEO_JSON)
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        Ok(response)
    }
}

#[async_trait]
impl WeatherClient for NwsClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_point(&self, latitude: f64, longitude: f64) -> Result<GridPoint, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = self.build_points_url(latitude, longitude);
        debug!(url = %url, "Fetching grid point");

        let document: PointsResponse = self
            .get_json(&url)
            .await?
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let properties = document.properties;
        let forecast_url = properties
            .forecast
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| WeatherError::ParseError("No forecast URL in response".to_string()))?;
        let (city, state) = properties
            .relative_location
            .map(|r| (r.properties.city, r.properties.state))
            .unwrap_or_default();

        Ok(GridPoint {
            forecast_url,
            forecast_hourly_url: properties.forecast_hourly,
            grid_id: properties.grid_id,
            city,
            state,
        })
    }

    #[instrument(skip(self))]
    async fn get_forecast(&self, forecast_url: &str) -> Result<PeriodForecast, WeatherError> {
        let url = Url::parse(forecast_url)
            .map_err(|e| WeatherError::InvalidUrl(format!("{forecast_url}: {e}")))?;
        debug!(url = %url, "Fetching forecast");

        let document: ForecastResponse = self
            .get_json(url.as_str())
            .await?
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        Ok(document.properties)
    }
}
