//! Weather lookup service
//!
//! Runs the postal code lookup chain: geocode, refine the place name,
//! fetch point metadata, fetch the forecast, then find a photo.
//! Each request waits for the previous one. Any failure before the
//! photo step ends the lookup.

use std::sync::Arc;

use domain::entities::{Forecast, Place};
use domain::value_objects::{GeoLocation, PostalCode};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{GeocodingPort, ReverseGeocodingPort, WeatherPort};
use crate::services::LocationImageService;

/// Everything needed to render a lookup result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub postal_code: PostalCode,
    pub location: GeoLocation,
    pub place: Place,
    pub forecast: Forecast,
    /// Optional landmark photo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Service orchestrating a weather lookup by postal code
pub struct WeatherLookupService {
    geocoding: Arc<dyn GeocodingPort>,
    reverse_geocoding: Option<Arc<dyn ReverseGeocodingPort>>,
    weather: Arc<dyn WeatherPort>,
    images: LocationImageService,
}

impl std::fmt::Debug for WeatherLookupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherLookupService")
            .field("geocoding", &"<GeocodingPort>")
            .field("reverse_geocoding", &self.reverse_geocoding.is_some())
            .field("weather", &"<WeatherPort>")
            .field("images", &self.images)
            .finish()
    }
}

impl WeatherLookupService {
    /// Create a lookup service without place refinement or photos
    #[must_use]
    pub fn new(geocoding: Arc<dyn GeocodingPort>, weather: Arc<dyn WeatherPort>) -> Self {
        Self {
            geocoding,
            reverse_geocoding: None,
            weather,
            images: LocationImageService::disabled(),
        }
    }

    /// Refine place names from coordinates
    #[must_use]
    pub fn with_reverse_geocoding(mut self, reverse: Arc<dyn ReverseGeocodingPort>) -> Self {
        self.reverse_geocoding = Some(reverse);
        self
    }

    /// Attach a photo lookup
    #[must_use]
    pub fn with_images(mut self, images: LocationImageService) -> Self {
        self.images = images;
        self
    }

    /// Look up the forecast for raw postal code input
    ///
    /// # Errors
    ///
    /// - `InvalidLocation` if the input is empty or the code is unknown
    /// - `WeatherUnavailable` if point metadata cannot be fetched
    /// - `ForecastUnavailable` if the forecast cannot be fetched
    /// - `MalformedResponse` if a provider payload lacks required data
    #[instrument(skip(self))]
    pub async fn lookup(&self, zipcode: &str) -> Result<WeatherReport, ApplicationError> {
        let postal_code = PostalCode::parse(zipcode)
            .map_err(|e| ApplicationError::InvalidLocation(e.to_string()))?;

        let geocoded = self.geocoding.geocode(&postal_code).await?;
        debug!(
            postal_code = %postal_code,
            location = %geocoded.location,
            place = %geocoded.place_name,
            "Geocoded postal code"
        );

        let place = self
            .refine_place(
                Place::new(geocoded.place_name, geocoded.state),
                &geocoded.location,
            )
            .await;

        let point = self.weather.get_point(&geocoded.location).await?;
        debug!(forecast_url = %point.forecast_url, "Resolved weather point");

        let forecast = self.weather.get_forecast(&point).await?;

        let image_url = self.images.find_image(&place).await;

        info!(
            postal_code = %postal_code,
            place = %place.display_name(),
            periods = forecast.periods.len(),
            has_image = image_url.is_some(),
            "Weather lookup complete"
        );

        Ok(WeatherReport {
            postal_code,
            location: geocoded.location,
            place,
            forecast,
            image_url,
        })
    }

    /// Override the default place with reverse geocoding results
    ///
    /// Falls back to the defaults on any failure.
    async fn refine_place(&self, place: Place, location: &GeoLocation) -> Place {
        let Some(reverse) = &self.reverse_geocoding else {
            return place;
        };

        match reverse.reverse_geocode(location).await {
            Ok(refined) => place.refined(refined.city, refined.principal_subdivision),
            Err(e) => {
                warn!(error = %e, "Reverse geocoding failed, keeping default place name");
                place
            },
        }
    }
}
