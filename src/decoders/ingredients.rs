use crate::model::Ingredient;
use log::{debug, warn};
use serde_json::{Map, Value};

/// Number of numbered ingredient/measure slots TheMealDB exposes per meal
pub const INGREDIENT_SLOTS: usize = 20;

/// A slot held something other than a string or null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSlot {
    pub key: String,
}

/// Flatten `strIngredient1..20` / `strMeasure1..20` into ingredient pairs.
///
/// A slot pair is kept only when both fields are present and non-blank after
/// trimming. Missing, null and blank slots are skipped. Every index is
/// checked because the API leaves trailing slots blank instead of omitting
/// them. If any slot holds a non-string value the whole block is treated as
/// malformed and an empty list is returned.
pub fn normalize_ingredients(fields: &Map<String, Value>) -> Vec<Ingredient> {
    match extract_ingredients(fields) {
        Ok(ingredients) => ingredients,
        Err(InvalidSlot { key }) => {
            warn!("Ingredient slot '{}' has an unexpected type, dropping ingredients", key);
            Vec::new()
        }
    }
}

/// Strict variant of [`normalize_ingredients`] that reports the first bad slot.
pub fn extract_ingredients(fields: &Map<String, Value>) -> Result<Vec<Ingredient>, InvalidSlot> {
    let mut ingredients = Vec::new();

    for index in 1..=INGREDIENT_SLOTS {
        let name = slot(fields, &format!("strIngredient{}", index))?;
        let measurement = slot(fields, &format!("strMeasure{}", index))?;

        if let (Some(name), Some(measurement)) = (name, measurement) {
            ingredients.push(Ingredient {
                name: name.to_string(),
                measurement: measurement.to_string(),
            });
        }
    }

    debug!("Extracted {} ingredients", ingredients.len());
    Ok(ingredients)
}

/// Trimmed, non-empty string value of `key`; `None` for missing, null or blank.
fn slot<'a>(fields: &'a Map<String, Value>, key: &str) -> Result<Option<&'a str>, InvalidSlot> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            Ok((!trimmed.is_empty()).then_some(trimmed))
        }
        Some(_) => Err(InvalidSlot {
            key: key.to_string(),
        }),
    }
}
