//! Image search port

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for photo lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImageSearchPort: Send + Sync {
    /// Find one photo matching the query and return its display URL
    async fn random_photo(&self, query: &str) -> Result<String, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ImageSearchPort>();
    }
}
