//! Geocoding data models

use serde::{Deserialize, Serialize};

/// First place registered for a postal code
///
/// Coordinates are kept as the decimal strings the service returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalPlace {
    pub postal_code: String,
    pub place_name: String,
    /// State name, e.g. "California"
    pub state: Option<String>,
    /// State abbreviation, e.g. "CA"
    pub state_abbreviation: Option<String>,
    pub latitude: String,
    pub longitude: String,
}

/// Place details for a coordinate pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverseGeocode {
    pub city: Option<String>,
    pub principal_subdivision: Option<String>,
}
