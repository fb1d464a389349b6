//! Adapters implementing application ports

mod geocoding_adapter;
mod image_search_adapter;
mod weather_adapter;

pub use geocoding_adapter::{GeocodingAdapter, ReverseGeocodingAdapter};
pub use image_search_adapter::ImageSearchAdapter;
pub use weather_adapter::WeatherAdapter;
