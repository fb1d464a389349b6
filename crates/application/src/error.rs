//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The postal code is empty or unknown to the geocoding provider
    #[error("Invalid zipcode: {0}")]
    InvalidLocation(String),

    /// The geocoding provider could not be reached or refused to answer
    #[error("Location service unavailable: {0}")]
    LocationServiceUnavailable(String),

    /// The weather point metadata could not be retrieved
    #[error("Unable to fetch weather data: {0}")]
    WeatherUnavailable(String),

    /// The forecast could not be retrieved
    #[error("Unable to fetch forecast data: {0}")]
    ForecastUnavailable(String),

    /// A provider answered successfully but the payload lacks what we need
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Short message suitable for showing to the person who asked
    ///
    /// Provider details stay in the `Display` output for logs.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidLocation(_) | Self::LocationServiceUnavailable(_) => "Invalid zipcode",
            Self::WeatherUnavailable(_) => "Unable to fetch weather data",
            Self::ForecastUnavailable(_) => "Unable to fetch forecast data",
            Self::MalformedResponse(_) => "Unable to process weather data",
            Self::Configuration(_) | Self::Internal(_) => "Something went wrong",
        }
    }

    /// Whether the failure originates from an upstream provider
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::LocationServiceUnavailable(_)
                | Self::WeatherUnavailable(_)
                | Self::ForecastUnavailable(_)
                | Self::MalformedResponse(_)
        )
    }
}
