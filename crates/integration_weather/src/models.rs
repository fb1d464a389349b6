//! NWS API response models
//!
//! Only the fields the lookup uses are modelled; everything else in the
//! GeoJSON documents is ignored.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// `/points/{lat},{lon}` document
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PointsResponse {
    pub properties: PointProperties,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PointProperties {
    #[serde(default)]
    pub forecast: Option<String>,
    #[serde(default)]
    pub forecast_hourly: Option<String>,
    #[serde(default)]
    pub grid_id: Option<String>,
    #[serde(default)]
    pub relative_location: Option<RelativeLocation>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RelativeLocation {
    pub properties: RelativeLocationProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RelativeLocationProperties {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/// Forecast document
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ForecastResponse {
    pub properties: PeriodForecast,
}

/// Grid point metadata for a coordinate pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPoint {
    /// URL of the period forecast
    pub forecast_url: String,
    /// URL of the hourly forecast
    pub forecast_hourly_url: Option<String>,
    /// Forecast office, e.g. "LOX"
    pub grid_id: Option<String>,
    /// Nearest city reported by NWS
    pub city: Option<String>,
    pub state: Option<String>,
}

/// Period forecast for a grid point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodForecast {
    /// Last update time
    #[serde(default)]
    pub updated: Option<DateTime<FixedOffset>>,
    /// Periods in chronological order
    #[serde(default)]
    pub periods: Vec<Period>,
}

/// A single forecast period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub number: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub end_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub is_daytime: bool,
    pub temperature: i32,
    #[serde(default)]
    pub temperature_unit: String,
    #[serde(default)]
    pub wind_speed: String,
    #[serde(default)]
    pub wind_direction: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub short_forecast: String,
    #[serde(default)]
    pub detailed_forecast: String,
}
