use reqwest::Url;
use serde::Serialize;

/// One (name, measurement) pair belonging to a meal.
///
/// Both fields are non-empty; blank slots from the source are dropped
/// during decoding rather than represented here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub measurement: String,
}

/// A single recipe record as returned by TheMealDB.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    /// `None` when the source did not provide instructions (e.g. list endpoint)
    pub instructions: Option<String>,
    /// In the source's numbered-slot order
    pub ingredients: Vec<Ingredient>,
}

/// The sorted set of meals currently loaded for the configured category.
pub type MealCollection = Vec<Meal>;

impl Meal {
    /// Ingredients rendered as `"name: measurement"` lines
    pub fn ingredient_lines(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .map(|ingredient| format!("{}: {}", ingredient.name, ingredient.measurement))
            .collect()
    }

    pub fn instructions_or_default(&self) -> &str {
        self.instructions.as_deref().unwrap_or_default()
    }

    /// Parsed thumbnail URL, `None` if the source sent something unparseable
    pub fn thumbnail(&self) -> Option<Url> {
        Url::parse(&self.thumbnail_url).ok()
    }
}

/// Sort meals ascending by name using plain lexicographic string ordering.
///
/// The sort is stable, so meals with equal names keep their source order.
pub fn sort_by_name(meals: &mut [Meal]) {
    meals.sort_by(|a, b| a.name.cmp(&b.name));
}
