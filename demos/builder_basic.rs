//! Basic usage of the RecipeClient builder API
//!
//! This example walks through the list/detail flow a recipe screen uses:
//! 1. Load the dessert list
//! 2. Narrow it with the prefix search
//! 3. Load the full recipe for one entry

use dessert_recipes::{DetailOutcome, RecipeClient};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = RecipeClient::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    println!("=== Dessert list ===");
    let count = client.load_list().await?;
    println!("Loaded {} desserts", count);

    println!("\n=== Search: \"choc\" ===");
    let matches = client.filtered("choc");
    for meal in &matches {
        println!("{:>8}  {}", meal.id, meal.name);
    }

    let collection = client.collection();
    let Some(first) = matches.first().or(collection.first()) else {
        println!("Nothing to show");
        return Ok(());
    };

    println!("\n=== Detail: {} ===", first.name);
    match client.load_detail(&first.id).await? {
        DetailOutcome::Loaded(meal) => {
            println!("Ingredients:");
            for line in meal.ingredient_lines() {
                println!("  {}", line);
            }
            println!("\nInstructions:");
            println!("{}", meal.instructions_or_default());
        }
        DetailOutcome::NotFound => println!("Recipe {} not found", first.id),
        DetailOutcome::Superseded => unreachable!(),
    }

    Ok(())
}
