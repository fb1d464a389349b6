//! Reverse geocoding port

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Place details refined from coordinates
///
/// Either field may be absent or blank, in which case the geocoder's
/// defaults stand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinedLocation {
    pub city: Option<String>,
    pub principal_subdivision: Option<String>,
}

/// Port for reverse geocoding operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReverseGeocodingPort: Send + Sync {
    /// Look up a human-readable place for the coordinates
    async fn reverse_geocode(
        &self,
        location: &GeoLocation,
    ) -> Result<RefinedLocation, ApplicationError>;
}
