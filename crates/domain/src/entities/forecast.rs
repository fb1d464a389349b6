//! Forecast entities

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::value_objects::TemperatureBand;

/// One time-bucketed prediction, e.g. "This Afternoon" or "Tonight"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    /// Sequence number assigned by the provider
    pub number: u32,
    /// Period label
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<FixedOffset>>,
    pub is_daytime: bool,
    /// Temperature in `temperature_unit`
    pub temperature: i32,
    /// Unit symbol, e.g. "F"
    pub temperature_unit: String,
    /// Wind speed as text, e.g. "5 to 10 mph"
    pub wind_speed: String,
    /// Compass direction, e.g. "SW"
    pub wind_direction: String,
    pub short_forecast: String,
    pub detailed_forecast: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ForecastPeriod {
    /// Temperature band of this period
    #[must_use]
    pub const fn band(&self) -> TemperatureBand {
        TemperatureBand::from_temperature(self.temperature)
    }

    /// Wind as shown to the user, e.g. "10 mph NW"
    #[must_use]
    pub fn wind(&self) -> String {
        format!("{} {}", self.wind_speed, self.wind_direction)
            .trim()
            .to_string()
    }
}

/// Chronologically ordered forecast periods for one grid point
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// When the provider last updated the forecast
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<FixedOffset>>,
    pub periods: Vec<ForecastPeriod>,
}

impl Forecast {
    /// The first period, treated as current conditions
    #[must_use]
    pub fn current(&self) -> Option<&ForecastPeriod> {
        self.periods.first()
    }

    /// Whether the provider returned no periods at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}
