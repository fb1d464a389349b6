//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the geocoding, weather and image adapters, configuration
//! loading, HTML templates and tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod templates;

pub use adapters::*;
pub use config::{AppConfig, ServerConfig};
pub use telemetry::{LogFormat, TelemetryError, init_tracing};
pub use templates::{Fragment, TemplateContext, TemplateEngine, TemplateError};
