#![forbid(unsafe_code)]
//! Image search integration for ZipWeather
//!
//! Fetches one random landmark photo per query from the Unsplash API
//! (<https://unsplash.com/documentation#get-a-random-photo>).
//! Requires an access key; without one no client is built.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_imagesearch::{ImageSearchConfig, ImageSearchProvider, UnsplashClient};
//!
//! let config = ImageSearchConfig {
//!     access_key: Some("...".to_string()),
//!     ..Default::default()
//! };
//! let client = UnsplashClient::new(&config)?;
//! let photo = client.random_photo("Beverly Hills, California landmark").await?;
//! println!("{}", photo.regular_url);
//! ```

mod config;
mod error;
mod models;
mod provider;
mod unsplash;

pub use config::ImageSearchConfig;
pub use error::ImageSearchError;
pub use models::Photo;
pub use provider::ImageSearchProvider;
pub use unsplash::UnsplashClient;
