//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Postal code is empty after trimming
    #[error("Invalid postal code: {0}")]
    InvalidPostalCode(String),

    /// Latitude or longitude outside the valid range
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
}
