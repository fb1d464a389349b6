#![forbid(unsafe_code)]
//! Geocoding integration for ZipWeather
//!
//! Two keyless public services:
//!
//! - [`ZippopotamClient`] resolves a postal code to coordinates and a place
//!   name via Zippopotam.us (<https://api.zippopotam.us>).
//! - [`BigDataCloudClient`] resolves coordinates back to a city and
//!   principal subdivision via BigDataCloud's client-side reverse geocoder.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{GeocodingClient, GeocodingConfig, ZippopotamClient};
//!
//! let client = ZippopotamClient::new(&GeocodingConfig::default())?;
//! let place = client.lookup_postal_code("90210").await?;
//! println!("{} ({}, {})", place.place_name, place.latitude, place.longitude);
//! ```

mod bigdatacloud;
mod config;
mod error;
mod models;
mod provider;
mod zippopotam;

pub use bigdatacloud::BigDataCloudClient;
pub use config::{GeocodingConfig, ReverseGeocodingConfig};
pub use error::GeocodingError;
pub use models::{PostalPlace, ReverseGeocode};
pub use provider::{GeocodingClient, ReverseGeocodingClient};
pub use zippopotam::ZippopotamClient;
