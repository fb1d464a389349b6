//! Image search error types

use thiserror::Error;

/// Errors that can occur during image search operations
#[derive(Debug, Error)]
pub enum ImageSearchError {
    /// Connection to the image service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the image service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the image service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Search query is invalid or empty
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Access key is missing or invalid
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// No photo matches the query
    #[error("No photos found for query: {query}")]
    NoResults {
        /// The search query that returned no photos
        query: String,
    },

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ImageSearchError::NoResults {
            query: "Nowhere landmark".to_string(),
        };
        assert!(err.to_string().contains("Nowhere landmark"));

        let err = ImageSearchError::AuthenticationFailed("Invalid access key".to_string());
        assert_eq!(
            err.to_string(),
            "Authentication failed: Invalid access key"
        );
    }
}
