use std::time::Duration;

use log::debug;
use reqwest::Url;

use crate::{ClientConfig, Fetcher, RecipeClient, RecipeError, RequestFetcher};

/// Builder for configuring a [`RecipeClient`]
#[derive(Default)]
pub struct RecipeClientBuilder {
    base_url: Option<String>,
    category: Option<String>,
    timeout: Option<Duration>,
    fetcher: Option<Box<dyn Fetcher>>,
}

impl RecipeClientBuilder {
    /// Start from a loaded configuration; later calls override its values
    ///
    /// # Example
    /// ```
    /// use dessert_recipes::{ClientConfig, RecipeClient};
    ///
    /// let builder = RecipeClient::builder().config(&ClientConfig::default());
    /// ```
    pub fn config(mut self, config: &ClientConfig) -> Self {
        self.base_url = Some(config.base_url.clone());
        self.category = Some(config.category.clone());
        self.timeout = Some(config.timeout());
        self
    }

    /// Set the API base URL (defaults to TheMealDB's public v1 API)
    ///
    /// # Example
    /// ```
    /// use dessert_recipes::RecipeClient;
    ///
    /// let builder = RecipeClient::builder()
    ///     .base_url("http://localhost:8080/api/json/v1/1/");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the category used by `load_list` (defaults to "Dessert")
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set a timeout for HTTP requests. Ignored when a custom fetcher is set.
    ///
    /// # Example
    /// ```
    /// use dessert_recipes::RecipeClient;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeClient::builder().timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Use a custom transport instead of the default `reqwest` one
    pub fn fetcher(mut self, fetcher: impl Fetcher + 'static) -> Self {
        self.fetcher = Some(Box::new(fetcher));
        self
    }

    /// Build the client
    ///
    /// # Errors
    /// Returns `RecipeError::Builder` if the base URL is not an absolute
    /// http(s) URL or the category is blank, and `RecipeError::Network` if the
    /// HTTP client cannot be created.
    pub fn build(self) -> Result<RecipeClient, RecipeError> {
        let defaults = ClientConfig::default();

        let mut base_url = self.base_url.unwrap_or(defaults.base_url);
        // Url::join replaces the last segment unless the base ends with '/'
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url = Url::parse(&base_url)
            .map_err(|e| RecipeError::Builder(format!("Invalid base URL '{}': {}", base_url, e)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(RecipeError::Builder(format!(
                "Unsupported URL scheme '{}'",
                base_url.scheme()
            )));
        }

        let category = self.category.unwrap_or(defaults.category);
        if category.trim().is_empty() {
            return Err(RecipeError::Builder("Category cannot be empty".to_string()));
        }

        let fetcher: Box<dyn Fetcher> = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Box::new(RequestFetcher::new(self.timeout)?),
        };

        debug!("Building client for {} ({})", base_url, category);
        Ok(RecipeClient::new(fetcher, &base_url, category.trim()))
    }
}
