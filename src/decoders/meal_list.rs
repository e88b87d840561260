use super::meal::RawMeal;
use crate::error::RecipeError;
use crate::model::Meal;
use log::debug;
use serde::de::{Error as _, Unexpected};
use serde::Deserialize;

/// Response envelope shared by the filter and lookup endpoints.
#[derive(Debug, Deserialize)]
struct MealResults {
    // Required but nullable: an absent key is an error, `null` is not
    #[serde(deserialize_with = "Option::deserialize")]
    meals: Option<Vec<RawMeal>>,
}

fn parse(body: &[u8]) -> Result<Option<Vec<Meal>>, RecipeError> {
    let results: MealResults = serde_json::from_slice(body)?;
    Ok(results
        .meals
        .map(|meals| meals.into_iter().map(Meal::from).collect()))
}

/// Decode a `{"meals": [...]}` document, preserving element order.
///
/// Any element that fails to decode fails the whole batch. A `null` or
/// missing `meals` key is a decode error.
pub fn decode_meal_list(body: &[u8]) -> Result<Vec<Meal>, RecipeError> {
    parse(body)?.ok_or_else(|| {
        RecipeError::Decode(serde_json::Error::invalid_type(
            Unexpected::Unit,
            &"an array of meals",
        ))
    })
}

/// Like [`decode_meal_list`], but `{"meals": null}` yields an empty list.
///
/// TheMealDB answers zero-result queries with `null`, so this is what callers
/// reading a successful response should use.
pub fn decode_meals_or_empty(body: &[u8]) -> Result<Vec<Meal>, RecipeError> {
    let meals = parse(body)?.unwrap_or_else(|| {
        debug!("Response contained \"meals\": null, treating as no meals");
        Vec::new()
    });
    Ok(meals)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESSERTS: &str = r#"{
        "meals": [
            {"strMeal": "Chocolate Gateau", "strMealThumb": "https://www.themealdb.com/images/media/meals/tqtywx1468317395.jpg", "idMeal": "52776"},
            {"strMeal": "Apam balik", "strMealThumb": "https://www.themealdb.com/images/media/meals/adxcbq1619787919.jpg", "idMeal": "53049"},
            {"strMeal": "Bakewell tart", "strMealThumb": "https://www.themealdb.com/images/media/meals/wyrqqq1468233628.jpg", "idMeal": "52767"}
        ]
    }"#;

    #[test]
    fn test_decode_preserves_order_and_count() {
        let meals = decode_meal_list(DESSERTS.as_bytes()).unwrap();
        let ids: Vec<&str> = meals.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["52776", "53049", "52767"]);
    }

    #[test]
    fn test_empty_array() {
        let meals = decode_meal_list(br#"{"meals": []}"#).unwrap();
        assert!(meals.is_empty());
    }

    #[test]
    fn test_null_meals_is_strict_error() {
        let err = decode_meal_list(br#"{"meals": null}"#).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_null_meals_is_empty_when_lenient() {
        let meals = decode_meals_or_empty(br#"{"meals": null}"#).unwrap();
        assert!(meals.is_empty());
    }

    #[test]
    fn test_missing_meals_key_fails_both_ways() {
        assert!(decode_meal_list(br#"{}"#).unwrap_err().is_decode());
        assert!(decode_meals_or_empty(br#"{"results": []}"#)
            .unwrap_err()
            .is_decode());
    }

    #[test]
    fn test_one_bad_element_fails_batch() {
        let body = r#"{
            "meals": [
                {"strMeal": "Apam balik", "strMealThumb": "https://example.com/a.jpg", "idMeal": "53049"},
                {"strMeal": "Bakewell tart", "strMealThumb": "https://example.com/b.jpg"}
            ]
        }"#;

        assert!(decode_meal_list(body.as_bytes()).unwrap_err().is_decode());
        assert!(decode_meals_or_empty(body.as_bytes())
            .unwrap_err()
            .is_decode());
    }

    #[test]
    fn test_malformed_json() {
        assert!(decode_meal_list(b"<html>502 Bad Gateway</html>")
            .unwrap_err()
            .is_decode());
    }
}
