//! Domain entities

mod forecast;
mod place;

pub use forecast::{Forecast, ForecastPeriod};
pub use place::Place;
