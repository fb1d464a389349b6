//! Resolved place name for a lookup

use serde::{Deserialize, Serialize};

/// A human-readable place: city or locality name plus an optional region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    /// City or locality name
    pub name: String,
    /// State or principal subdivision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Place {
    /// Create a place, dropping a blank region
    #[must_use]
    pub fn new(name: impl Into<String>, region: Option<String>) -> Self {
        Self {
            name: name.into(),
            region: non_empty(region),
        }
    }

    /// Override fields with non-empty refinements
    ///
    /// Blank or missing values leave the current field untouched.
    #[must_use]
    pub fn refined(self, name: Option<String>, region: Option<String>) -> Self {
        Self {
            name: non_empty(name).unwrap_or(self.name),
            region: non_empty(region).or(self.region),
        }
    }

    /// Name shown to the user: `"{name}, {region}"` or just the name
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.region {
            Some(region) => format!("{}, {region}", self.name),
            None => self.name.clone(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
