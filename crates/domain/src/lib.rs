//! Domain layer for ZipWeather
//!
//! Contains the request-scoped weather lookup model: postal codes, coordinates,
//! places, forecast periods and temperature bands.
//! This layer has no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
