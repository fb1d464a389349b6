//! Geocoding provider traits

use async_trait::async_trait;

use crate::{GeocodingError, PostalPlace, ReverseGeocode};

/// Postal code to coordinates
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Look up the first place registered for a postal code
    ///
    /// # Errors
    ///
    /// Returns `GeocodingError::NotFound` if the service does not know the
    /// code and `GeocodingError::NoResults` if it returns no places.
    async fn lookup_postal_code(&self, postal_code: &str) -> Result<PostalPlace, GeocodingError>;
}

/// Coordinates to place description
#[async_trait]
pub trait ReverseGeocodingClient: Send + Sync {
    /// Describe the place at the given coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ReverseGeocode, GeocodingError>;
}
