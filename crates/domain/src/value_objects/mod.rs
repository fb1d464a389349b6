//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod postal_code;
mod temperature_band;

pub use geo_location::GeoLocation;
pub use postal_code::PostalCode;
pub use temperature_band::TemperatureBand;
