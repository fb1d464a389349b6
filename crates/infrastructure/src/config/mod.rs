//! Application configuration
//!
//! Layered: built-in defaults, then an optional `config.toml` in the
//! working directory, then `ZIPWEATHER__*` environment variables
//! (e.g. `ZIPWEATHER__SERVER__PORT`, `ZIPWEATHER__IMAGE_SEARCH__ACCESS_KEY`).

mod server;

use application::error::ApplicationError;
use integration_geocoding::{GeocodingConfig, ReverseGeocodingConfig};
use integration_imagesearch::ImageSearchConfig;
use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};
pub use server::ServerConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "ZIPWEATHER";

/// Separator between nested keys in environment variables
pub const ENV_SEPARATOR: &str = "__";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Postal code lookup
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// Place name enrichment from coordinates
    #[serde(default)]
    pub reverse_geocoding: ReverseGeocodingConfig,

    /// National Weather Service
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Landmark photos (disabled without an access key)
    #[serde(default)]
    pub image_search: ImageSearchConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration using the given file stem instead of `config`
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized.
    pub fn load_from(file: &str) -> Result<Self, config::ConfigError> {
        let builder = Self::builder()?
            // Load from file if exists
            .add_source(config::File::with_name(file).required(false))
            // Override with environment variables (e.g., ZIPWEATHER__SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError>
    {
        config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.log_format", "text")?
            .set_default("geocoding.base_url", "https://api.zippopotam.us")?
            .set_default("reverse_geocoding.enabled", true)?
            .set_default("weather.base_url", "https://api.weather.gov")
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` naming the first invalid section.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        fn section(name: &'static str) -> impl Fn(String) -> ApplicationError {
            move |e| ApplicationError::Configuration(format!("{name}: {e}"))
        }

        if self.server.port == 0 {
            return Err(ApplicationError::Configuration(
                "server: port must be greater than 0".to_string(),
            ));
        }
        self.geocoding.validate().map_err(section("geocoding"))?;
        if self.reverse_geocoding.enabled {
            self.reverse_geocoding
                .validate()
                .map_err(section("reverse_geocoding"))?;
        }
        self.weather.validate().map_err(section("weather"))?;
        if self.image_search.is_enabled() {
            self.image_search.validate().map_err(section("image_search"))?;
        }
        Ok(())
    }
}
