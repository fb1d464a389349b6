//! Geocoding error types

use thiserror::Error;

/// Errors that can occur during geocoding operations
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to the geocoding service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the geocoding service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The service does not know the postal code
    #[error("Postal code not found: {0}")]
    NotFound(String),

    /// Failed to parse response from the geocoding service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The service answered with an empty place list
    #[error("No places found for postal code: {postal_code}")]
    NoResults {
        /// The postal code that returned no places
        postal_code: String,
    },

    /// Input cannot be sent to the service
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl GeocodingError {
    /// Returns true if the failure says something about the postal code
    /// itself rather than about the service
    #[must_use]
    pub const fn is_unknown_location(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::InvalidQuery(_))
    }

    /// Returns true if the service answered but the payload was unusable
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::ParseError(_) | Self::NoResults { .. })
    }
}
