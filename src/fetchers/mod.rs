mod request;

pub use request::{RequestFetcher, DEFAULT_TIMEOUT};

use crate::error::RecipeError;
use async_trait::async_trait;

/// The one thing the client needs from an HTTP transport
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET `url` and return the body of a 2xx response
    async fn get(&self, url: &str) -> Result<Vec<u8>, RecipeError>;
}
