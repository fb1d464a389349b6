//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::{WeatherPoint, WeatherPort};
use async_trait::async_trait;
use domain::entities::{Forecast, ForecastPeriod};
use domain::value_objects::GeoLocation;
use integration_weather::{
    GridPoint, NwsClient, Period, PeriodForecast, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for weather services using the National Weather Service API
pub struct WeatherAdapter {
    client: NwsClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"NwsClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create a new weather adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(WeatherConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = NwsClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map a points lookup failure
    fn map_point_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ParseError(_)
            | WeatherError::InvalidUrl(_)
            | WeatherError::InvalidCoordinates => ApplicationError::MalformedResponse(err.to_string()),
            other => ApplicationError::WeatherUnavailable(other.to_string()),
        }
    }

    /// Map a forecast lookup failure
    fn map_forecast_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ParseError(_) | WeatherError::InvalidUrl(_) => {
                ApplicationError::MalformedResponse(err.to_string())
            },
            other => ApplicationError::ForecastUnavailable(other.to_string()),
        }
    }

    fn map_point(point: GridPoint) -> WeatherPoint {
        WeatherPoint {
            forecast_url: point.forecast_url,
            forecast_hourly_url: point.forecast_hourly_url,
            grid_id: point.grid_id,
            city: point.city,
            state: point.state,
        }
    }

    fn map_period(period: Period) -> ForecastPeriod {
        ForecastPeriod {
            number: period.number,
            name: period.name,
            start_time: period.start_time,
            end_time: period.end_time,
            is_daytime: period.is_daytime,
            temperature: period.temperature,
            temperature_unit: period.temperature_unit,
            wind_speed: period.wind_speed,
            wind_direction: period.wind_direction,
            short_forecast: period.short_forecast,
            detailed_forecast: period.detailed_forecast,
            icon: period.icon,
        }
    }

    fn map_forecast(forecast: PeriodForecast) -> Forecast {
        Forecast {
            updated: forecast.updated,
            periods: forecast.periods.into_iter().map(Self::map_period).collect(),
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(location = %location))]
    async fn get_point(&self, location: &GeoLocation) -> Result<WeatherPoint, ApplicationError> {
        let point = self
            .client
            .get_point(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_point_error)?;

        debug!(grid_id = ?point.grid_id, "Resolved grid point");
        Ok(Self::map_point(point))
    }

    #[instrument(skip(self), fields(url = %point.forecast_url))]
    async fn get_forecast(&self, point: &WeatherPoint) -> Result<Forecast, ApplicationError> {
        let forecast = self
            .client
            .get_forecast(&point.forecast_url)
            .await
            .map_err(Self::map_forecast_error)?;

        debug!(periods = forecast.periods.len(), "Fetched forecast");
        Ok(Self::map_forecast(forecast))
    }
}
