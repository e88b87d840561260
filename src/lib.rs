//! Client for browsing dessert recipes from [TheMealDB](https://themealdb.com).
//!
//! TheMealDB returns each recipe as a flat JSON object with twenty numbered
//! `strIngredientN` / `strMeasureN` slots. This crate decodes those responses
//! into [`Meal`] values with a clean ingredient list, and wraps the two
//! endpoints used by a list/detail UI in a [`RecipeClient`] that owns the
//! loaded collection and the current selection.
//!
//! ```no_run
//! # use dessert_recipes::{DetailOutcome, RecipeClient};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = RecipeClient::builder().build()?;
//! client.load_list().await?;
//!
//! for meal in client.filtered("choc") {
//!     println!("{} ({})", meal.name, meal.id);
//! }
//!
//! if let DetailOutcome::Loaded(meal) = client.load_detail("52893").await? {
//!     println!("{}", meal.ingredient_lines().join("\n"));
//! }
//! # Ok(())
//! # }
//! ```

// UniFFI derives look up `crate::UniFfiTag`, so scaffolding lives at the root
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

pub mod builder;
pub mod client;
pub mod config;
pub mod decoders;
pub mod error;
pub mod fetchers;
pub mod filter;
pub mod model;
pub mod uniffi_bindings;

pub use builder::RecipeClientBuilder;
pub use client::{DetailOutcome, Failure, Operation, RecipeClient, StateEvent};
pub use config::{load_config, ClientConfig};
pub use error::RecipeError;
pub use fetchers::{Fetcher, RequestFetcher};
pub use filter::filter_meals;
pub use model::{Ingredient, Meal, MealCollection};

/// Fetch the dessert list once with default settings, sorted by name
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let desserts = dessert_recipes::fetch_desserts().await?;
/// println!("{} desserts", desserts.len());
/// # Ok(())
/// # }
/// ```
pub async fn fetch_desserts() -> Result<MealCollection, RecipeError> {
    let client = RecipeClient::builder().build()?;
    client.load_list().await?;
    Ok(client.collection())
}

/// Look up one meal by id with default settings. `Ok(None)` means not found.
pub async fn fetch_meal(id: &str) -> Result<Option<Meal>, RecipeError> {
    let client = RecipeClient::builder().build()?;
    match client.load_detail(id).await? {
        DetailOutcome::Loaded(meal) => Ok(Some(meal)),
        DetailOutcome::NotFound | DetailOutcome::Superseded => Ok(None),
    }
}
