//! National Weather Service integration
//!
//! Client for the NWS API (<https://api.weather.gov>).
//! Resolves coordinates to a forecast grid point and fetches the period
//! forecast for it. No API key is needed, but every request must identify
//! itself with a `User-Agent`.

pub mod client;
mod models;

pub use client::{NwsClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{GridPoint, Period, PeriodForecast};
