//! Geocoding adapters - Implement GeocodingPort and ReverseGeocodingPort
//! using integration_geocoding

use application::error::ApplicationError;
use application::ports::{GeocodeResult, GeocodingPort, RefinedLocation, ReverseGeocodingPort};
use async_trait::async_trait;
use domain::value_objects::{GeoLocation, PostalCode};
use integration_geocoding::{
    BigDataCloudClient, GeocodingClient, GeocodingConfig, GeocodingError, PostalPlace,
    ReverseGeocodingClient, ReverseGeocodingConfig, ZippopotamClient,
};
use tracing::{debug, instrument};

/// Adapter for postal code lookups using Zippopotam.us
pub struct GeocodingAdapter {
    client: ZippopotamClient,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"ZippopotamClient")
            .finish()
    }
}

impl GeocodingAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(&GeocodingConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: &GeocodingConfig) -> Result<Self, ApplicationError> {
        let client = ZippopotamClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration geocoding error to application error
    ///
    /// Only a rejected postal code is the caller's fault. Transport and
    /// status failures stay upstream failures even though the page still
    /// reads "Invalid zipcode".
    fn map_error(err: GeocodingError) -> ApplicationError {
        if err.is_unknown_location() {
            return ApplicationError::InvalidLocation(err.to_string());
        }
        if err.is_malformed() {
            return ApplicationError::MalformedResponse(err.to_string());
        }
        match err {
            GeocodingError::ConfigurationError(e) => ApplicationError::Configuration(e),
            other => ApplicationError::LocationServiceUnavailable(other.to_string()),
        }
    }

    /// Convert a provider place into a geocode result
    fn map_place(place: PostalPlace) -> Result<GeocodeResult, ApplicationError> {
        let location = GeoLocation::parse(&place.latitude, &place.longitude)
            .map_err(|e| ApplicationError::MalformedResponse(e.to_string()))?;

        Ok(GeocodeResult {
            location,
            place_name: place.place_name,
            state: place.state,
        })
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self), fields(postal_code = %postal_code))]
    async fn geocode(&self, postal_code: &PostalCode) -> Result<GeocodeResult, ApplicationError> {
        let place = self
            .client
            .lookup_postal_code(postal_code.as_str())
            .await
            .map_err(Self::map_error)?;

        debug!(place = %place.place_name, "Resolved postal code");
        Self::map_place(place)
    }
}

/// Adapter for reverse geocoding using BigDataCloud
pub struct ReverseGeocodingAdapter {
    client: BigDataCloudClient,
}

impl std::fmt::Debug for ReverseGeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReverseGeocodingAdapter")
            .field("client", &"BigDataCloudClient")
            .finish()
    }
}

impl ReverseGeocodingAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: &ReverseGeocodingConfig) -> Result<Self, ApplicationError> {
        let client = BigDataCloudClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    fn map_error(err: GeocodingError) -> ApplicationError {
        match err {
            GeocodingError::ParseError(e) => ApplicationError::MalformedResponse(e),
            GeocodingError::ConfigurationError(e) => ApplicationError::Configuration(e),
            other => ApplicationError::Internal(format!("Reverse geocoding failed: {other}")),
        }
    }
}

#[async_trait]
impl ReverseGeocodingPort for ReverseGeocodingAdapter {
    #[instrument(skip(self), fields(location = %location))]
    async fn reverse_geocode(
        &self,
        location: &GeoLocation,
    ) -> Result<RefinedLocation, ApplicationError> {
        let place = self
            .client
            .reverse_geocode(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)?;

        debug!(city = ?place.city, region = ?place.principal_subdivision, "Reverse geocoded");

        Ok(RefinedLocation {
            city: place.city,
            principal_subdivision: place.principal_subdivision,
        })
    }
}
