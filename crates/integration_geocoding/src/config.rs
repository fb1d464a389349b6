//! Geocoding configuration

use serde::{Deserialize, Serialize};

/// Configuration for the postal code geocoder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Zippopotam.us base URL
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// Country code used in the lookup path (ISO 3166-1 alpha-2, lowercase)
    #[serde(default = "default_country")]
    pub country: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Configuration for the reverse geocoder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReverseGeocodingConfig {
    /// Refine place names from coordinates
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// BigDataCloud base URL
    #[serde(default = "default_reverse_base_url")]
    pub base_url: String,

    /// Language of returned place names
    #[serde(default = "default_locality_language")]
    pub locality_language: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_geocoding_base_url() -> String {
    "https://api.zippopotam.us".to_string()
}

fn default_reverse_base_url() -> String {
    "https://api.bigdatacloud.net".to_string()
}

fn default_country() -> String {
    "us".to_string()
}

fn default_locality_language() -> String {
    "en".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_enabled() -> bool {
    true
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            country: default_country(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ReverseGeocodingConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            base_url: default_reverse_base_url(),
            locality_language: default_locality_language(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn validate_base_url(base_url: &str) -> Result<(), String> {
    let parsed = url::Url::parse(base_url).map_err(|e| format!("invalid base_url: {e}"))?;
    if parsed.cannot_be_a_base() {
        return Err(format!("base_url cannot be used as a base: {base_url}"));
    }
    Ok(())
}

impl GeocodingConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        validate_base_url(&self.base_url)?;

        if self.country.trim().is_empty() {
            return Err("country must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl ReverseGeocodingConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        validate_base_url(&self.base_url)?;

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
