use super::ingredients::normalize_ingredients;
use crate::error::RecipeError;
use crate::model::Meal;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::convert::TryFrom;

/// One meal object exactly as TheMealDB sends it.
///
/// The four named fields are checked by serde; everything else (including
/// the numbered ingredient slots) is kept in `slots` for the normalizer.
#[derive(Debug, Deserialize)]
pub(crate) struct RawMeal {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb")]
    thumbnail_url: String,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(flatten)]
    slots: Map<String, Value>,
}

impl TryFrom<Value> for RawMeal {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value)
    }
}

impl From<RawMeal> for Meal {
    fn from(raw: RawMeal) -> Self {
        let ingredients = normalize_ingredients(&raw.slots);
        Meal {
            id: raw.id,
            name: raw.name,
            thumbnail_url: raw.thumbnail_url,
            instructions: raw.instructions,
            ingredients,
        }
    }
}

/// Decode a single meal object.
///
/// Fails if `idMeal`, `strMeal` or `strMealThumb` is missing or not a string.
/// A malformed ingredient block never fails the meal; it yields no ingredients.
pub fn decode_meal(value: Value) -> Result<Meal, RecipeError> {
    let raw = RawMeal::try_from(value)?;
    Ok(raw.into())
}
