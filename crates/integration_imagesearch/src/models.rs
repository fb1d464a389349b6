//! Image search data models

use serde::{Deserialize, Serialize};

/// A photo returned by the image service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Provider photo id
    pub id: String,
    /// Display-sized image URL
    pub regular_url: String,
}
