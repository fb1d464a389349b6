//! Application services - Use case implementations

mod location_image_service;
mod weather_lookup_service;

pub use location_image_service::LocationImageService;
pub use weather_lookup_service::{WeatherLookupService, WeatherReport};
