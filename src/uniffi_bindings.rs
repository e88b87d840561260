//! UniFFI bindings for dessert-recipes
//!
//! This module provides FFI-compatible types and a client object for use with
//! iOS and Android. The async client is wrapped in synchronous methods that
//! drive a tokio runtime owned by the object.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::{DetailOutcome, Ingredient, Meal, RecipeClient, RecipeError};

/// FFI-compatible ingredient
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiIngredient {
    pub name: String,
    pub measurement: String,
}

/// FFI-compatible meal
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiMeal {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    /// Unset until the detail endpoint has been queried
    pub instructions: Option<String>,
    pub ingredients: Vec<FfiIngredient>,
}

impl From<Ingredient> for FfiIngredient {
    fn from(ingredient: Ingredient) -> Self {
        FfiIngredient {
            name: ingredient.name,
            measurement: ingredient.measurement,
        }
    }
}

impl From<Meal> for FfiMeal {
    fn from(meal: Meal) -> Self {
        FfiMeal {
            id: meal.id,
            name: meal.name,
            thumbnail_url: meal.thumbnail_url,
            instructions: meal.instructions,
            ingredients: meal.ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

/// FFI-compatible detail load result
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiDetailOutcome {
    Loaded { meal: FfiMeal },
    NotFound,
    Superseded,
}

impl From<DetailOutcome> for FfiDetailOutcome {
    fn from(outcome: DetailOutcome) -> Self {
        match outcome {
            DetailOutcome::Loaded(meal) => FfiDetailOutcome::Loaded { meal: meal.into() },
            DetailOutcome::NotFound => FfiDetailOutcome::NotFound,
            DetailOutcome::Superseded => FfiDetailOutcome::Superseded,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiRecipeError {
    /// Network failure or non-2xx response; the host should offer a retry
    NetworkError { message: String },
    /// Malformed response
    DecodeError { message: String },
    /// Invalid client configuration
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiRecipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiRecipeError::NetworkError { message } => write!(f, "Network error: {}", message),
            FfiRecipeError::DecodeError { message } => write!(f, "Decode error: {}", message),
            FfiRecipeError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiRecipeError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiRecipeError {}

impl From<RecipeError> for FfiRecipeError {
    fn from(err: RecipeError) -> Self {
        let message = err.to_string();
        match err {
            RecipeError::Network(_) | RecipeError::HttpStatus { .. } => {
                FfiRecipeError::NetworkError { message }
            }
            RecipeError::Decode(_) => FfiRecipeError::DecodeError { message },
            RecipeError::Builder(_) | RecipeError::Config(_) => {
                FfiRecipeError::ConfigError { message }
            }
        }
    }
}

/// Optional overrides for the client
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiClientConfig {
    pub base_url: Option<String>,
    pub category: Option<String>,
    pub timeout_seconds: Option<u64>,
}

/// Recipe client handle for mobile hosts
#[cfg_attr(feature = "uniffi", derive(uniffi::Object))]
pub struct FfiRecipeClient {
    runtime: tokio::runtime::Runtime,
    client: RecipeClient,
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
impl FfiRecipeClient {
    #[cfg_attr(feature = "uniffi", uniffi::constructor)]
    pub fn new(config: Option<FfiClientConfig>) -> Result<Arc<Self>, FfiRecipeError> {
        let config = config.unwrap_or_default();

        let runtime = tokio::runtime::Runtime::new().map_err(|e| FfiRecipeError::RuntimeError {
            message: format!("Failed to create async runtime: {}", e),
        })?;

        let mut builder = RecipeClient::builder();
        if let Some(base_url) = config.base_url {
            builder = builder.base_url(base_url);
        }
        if let Some(category) = config.category {
            builder = builder.category(category);
        }
        if let Some(timeout_secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }

        // reqwest needs a runtime context when the client is built
        let client = {
            let _guard = runtime.enter();
            builder.build()?
        };

        Ok(Arc::new(Self { runtime, client }))
    }

    /// Fetch the list; returns the number of meals loaded
    pub fn load_list(&self) -> Result<u32, FfiRecipeError> {
        let len = self.runtime.block_on(self.client.load_list())?;
        Ok(u32::try_from(len).unwrap_or(u32::MAX))
    }

    pub fn load_detail(&self, id: String) -> Result<FfiDetailOutcome, FfiRecipeError> {
        let outcome = self.runtime.block_on(self.client.load_detail(&id))?;
        Ok(outcome.into())
    }

    pub fn clear_selection(&self) {
        self.client.clear_selection();
    }

    pub fn collection(&self) -> Vec<FfiMeal> {
        self.client.collection().into_iter().map(Into::into).collect()
    }

    pub fn selection(&self) -> Option<FfiMeal> {
        self.client.selection().map(Into::into)
    }

    /// Collection narrowed by the case-insensitive prefix search
    pub fn filtered(&self, query: String) -> Vec<FfiMeal> {
        self.client.filtered(&query).into_iter().map(Into::into).collect()
    }
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[test]
    fn test_ffi_meal_conversion() {
        let meal = Meal {
            id: "52893".to_string(),
            name: "Apple & Blackberry Crumble".to_string(),
            thumbnail_url: "https://example.com/crumble.jpg".to_string(),
            instructions: Some("Bake.".to_string()),
            ingredients: vec![Ingredient {
                name: "Butter".to_string(),
                measurement: "60g".to_string(),
            }],
        };

        let ffi: FfiMeal = meal.into();
        assert_eq!(ffi.id, "52893");
        assert_eq!(ffi.instructions.as_deref(), Some("Bake."));
        assert_eq!(
            ffi.ingredients,
            vec![FfiIngredient {
                name: "Butter".to_string(),
                measurement: "60g".to_string(),
            }]
        );
    }

    #[test]
    fn test_error_mapping() {
        let err: FfiRecipeError = RecipeError::HttpStatus {
            status: 503,
            url: "http://x".to_string(),
        }
        .into();
        assert!(matches!(err, FfiRecipeError::NetworkError { .. }));

        let err: FfiRecipeError = RecipeError::Builder("bad".to_string()).into();
        assert_eq!(err.to_string(), "Config error: Builder error: bad");
    }

    #[cfg(feature = "uniffi")]
    #[test]
    fn test_scaffolding_at_crate_root() {
        assert!(std::any::type_name::<crate::UniFfiTag>().ends_with("UniFfiTag"));
    }

    #[test]
    fn test_get_version() {
        assert!(!get_version().is_empty());
    }

    #[test]
    fn test_invalid_config_is_error() {
        let config = FfiClientConfig {
            base_url: Some("::".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            FfiRecipeClient::new(Some(config)),
            Err(FfiRecipeError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_client_round_trip_against_mock_server() {
        let mut server = mockito::Server::new();
        let _list = server
            .mock("GET", "/filter.php")
            .match_query(Matcher::UrlEncoded("c".into(), "Dessert".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"meals": [
                    {"strMeal": "Eton Mess", "strMealThumb": "https://example.com/e.jpg", "idMeal": "2"},
                    {"strMeal": "Apam balik", "strMealThumb": "https://example.com/a.jpg", "idMeal": "1"}
                ]}"#,
            )
            .create();
        let _detail = server
            .mock("GET", "/lookup.php")
            .match_query(Matcher::UrlEncoded("i".into(), "1".into()))
            .with_status(200)
            .with_body(r#"{"meals": null}"#)
            .create();

        let client = FfiRecipeClient::new(Some(FfiClientConfig {
            base_url: Some(format!("{}/", server.url())),
            ..Default::default()
        }))
        .unwrap();

        assert_eq!(client.load_list().unwrap(), 2);
        let names: Vec<String> = client.collection().into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["Apam balik", "Eton Mess"]);
        assert_eq!(client.filtered("eton".to_string()).len(), 1);

        assert_eq!(
            client.load_detail("1".to_string()).unwrap(),
            FfiDetailOutcome::NotFound
        );
        assert!(client.selection().is_none());
    }
}
