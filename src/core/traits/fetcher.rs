use async_trait::async_trait;

use crate::core::errors::Result;

/// Port for retrieving remote configuration documents.
#[async_trait]
pub trait ConfigFetcher: Send + Sync {
    /// GET `url` and return the full response body.
    ///
    /// Non-success statuses are errors; the body is not interpreted.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
