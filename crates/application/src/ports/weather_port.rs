//! Weather service port
//!
//! Defines the interface for forecast retrieval. Lookups go through two
//! requests: point metadata for the coordinates, then the forecast it links to.

use async_trait::async_trait;
use domain::entities::Forecast;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Forecast metadata for one grid point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherPoint {
    /// URL of the period forecast resource
    pub forecast_url: String,
    /// URL of the hourly forecast resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast_hourly_url: Option<String>,
    /// Forecast office identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_id: Option<String>,
    /// Nearest city according to the weather provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State of the nearest city
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Port for weather service operations
#[allow(clippy::struct_field_names)] // automock generates struct with `get_*` prefixes
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get point metadata for a location
    ///
    /// Failures yield `ApplicationError::WeatherUnavailable`.
    async fn get_point(&self, location: &GeoLocation) -> Result<WeatherPoint, ApplicationError>;

    /// Get the period forecast linked from point metadata
    ///
    /// Failures yield `ApplicationError::ForecastUnavailable`.
    async fn get_forecast(&self, point: &WeatherPoint) -> Result<Forecast, ApplicationError>;
}
