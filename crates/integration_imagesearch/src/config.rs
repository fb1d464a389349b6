//! Image search configuration

use serde::{Deserialize, Serialize};

/// Configuration for the image search service
#[derive(Clone, Serialize, Deserialize)]
pub struct ImageSearchConfig {
    /// Unsplash access key (optional, image lookup is skipped without it)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,

    /// Unsplash API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for ImageSearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageSearchConfig")
            .field("access_key", &self.access_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.unsplash.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for ImageSearchConfig {
    fn default() -> Self {
        Self {
            access_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ImageSearchConfig {
    /// Check if an access key is configured
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.access_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!("base_url must be an http(s) URL: {}", self.base_url));
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
