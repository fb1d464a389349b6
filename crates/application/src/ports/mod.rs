//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod geocoding_port;
mod image_search_port;
mod reverse_geocoding_port;
mod weather_port;

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::{GeocodeResult, GeocodingPort};
#[cfg(test)]
pub use image_search_port::MockImageSearchPort;
pub use image_search_port::ImageSearchPort;
#[cfg(test)]
pub use reverse_geocoding_port::MockReverseGeocodingPort;
pub use reverse_geocoding_port::{RefinedLocation, ReverseGeocodingPort};
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::{WeatherPoint, WeatherPort};
