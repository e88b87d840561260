pub mod ingredients;
mod meal;
mod meal_list;

pub use ingredients::{extract_ingredients, normalize_ingredients, InvalidSlot, INGREDIENT_SLOTS};
pub use meal::decode_meal;
pub use meal_list::{decode_meal_list, decode_meals_or_empty};
