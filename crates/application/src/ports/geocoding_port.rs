//! Geocoding port
//!
//! Resolves a postal code to coordinates and a default place name.

use async_trait::async_trait;
use domain::value_objects::{GeoLocation, PostalCode};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// First match returned by the geocoding provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    /// Coordinates of the postal code area
    pub location: GeoLocation,
    /// Default place name, e.g. "Beverly Hills"
    pub place_name: String,
    /// Default region name, e.g. "California"
    pub state: Option<String>,
}

/// Port for geocoding operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a postal code
    ///
    /// Unknown codes yield `ApplicationError::InvalidLocation`.
    async fn geocode(&self, postal_code: &PostalCode) -> Result<GeocodeResult, ApplicationError>;
}
