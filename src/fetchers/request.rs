use super::Fetcher;
use crate::error::RecipeError;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Plain GET over `reqwest` with a whole-request timeout.
#[derive(Debug, Clone)]
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, RecipeError> {
        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("dessert-recipes/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for RequestFetcher {
    async fn get(&self, url: &str) -> Result<Vec<u8>, RecipeError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecipeError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(body.to_vec())
    }
}
