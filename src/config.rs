use config::{Config, ConfigError, Environment, File, Source};
use serde::Deserialize;
use std::time::Duration;

/// Settings for talking to TheMealDB
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL the endpoint paths are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Category passed to the filter endpoint
    #[serde(default = "default_category")]
    pub category: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            category: default_category(),
            timeout: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://themealdb.com/api/json/v1/1/".to_string()
}

fn default_category() -> String {
    "Dessert".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl ClientConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALDB__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALDB__TIMEOUT
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// See [`ClientConfig::load`]
pub fn load_config() -> Result<ClientConfig, ConfigError> {
    load_config_from(File::with_name("config").required(false))
}

fn load_config_from<S>(file: S) -> Result<ClientConfig, ConfigError>
where
    S: Source + Send + Sync + 'static,
{
    let settings = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix("MEALDB")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
