use clap::{Parser, Subcommand, ValueEnum};
use dessert_recipes::{ClientConfig, DetailOutcome, Meal, RecipeClient};
use log::{debug, error};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "dessert-recipes")]
#[command(version, about = "Browse dessert recipes from TheMealDB")]
#[command(long_about = r#"Browse dessert recipes from TheMealDB.

EXAMPLES:
    # List every dessert, sorted by name
    dessert-recipes list

    # Only desserts whose name starts with "choc" (case-insensitive)
    dessert-recipes list --search choc

    # Show ingredients and instructions for one recipe
    dessert-recipes show 52893

    # JSON output for scripting
    dessert-recipes list --format json | jq '.[].id'

CONFIGURATION:
    Settings are read from config.toml in the current directory and from
    MEALDB__* environment variables (MEALDB__TIMEOUT=10). Command-line
    flags take precedence.

EXIT CODES:
    0 - Success (including an empty list)
    1 - Error (network failure, malformed response, recipe not found)
"#)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    /// Override the API base URL
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List recipes in the configured category
    List {
        /// Only show recipes whose name starts with this text
        #[arg(short, long, value_name = "QUERY")]
        search: Option<String>,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Show ingredients and instructions for one recipe
    Show {
        /// Recipe id (idMeal)
        id: String,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = ClientConfig::load()?;
    debug!("{:?}", config);

    let mut builder = RecipeClient::builder().config(&config);
    if let Some(base_url) = args.base_url {
        builder = builder.base_url(base_url);
    }
    if let Some(timeout) = args.timeout {
        builder = builder.timeout(Duration::from_secs(timeout));
    }
    let client = builder.build()?;

    match args.command {
        Command::List { search, format } => {
            client.load_list().await?;
            let meals = client.filtered(search.as_deref().unwrap_or_default());
            print_list(&meals, format)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Show { id, format } => match client.load_detail(&id).await? {
            DetailOutcome::Loaded(meal) => {
                print_detail(&meal, format)?;
                Ok(ExitCode::SUCCESS)
            }
            DetailOutcome::NotFound | DetailOutcome::Superseded => {
                eprintln!("No recipe found with id {}", id);
                Ok(ExitCode::FAILURE)
            }
        },
    }
}

fn print_list(meals: &[Meal], format: Format) -> Result<(), serde_json::Error> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(meals)?),
        Format::Text => {
            for meal in meals {
                println!("{:>8}  {}", meal.id, meal.name);
            }
        }
    }
    Ok(())
}

fn print_detail(meal: &Meal, format: Format) -> Result<(), serde_json::Error> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(meal)?),
        Format::Text => {
            println!("{}", meal.name);
            println!("{}", meal.thumbnail_url);
            println!();
            println!("Ingredients:");
            for line in meal.ingredient_lines() {
                println!("  {}", line);
            }
            println!();
            println!("Instructions:");
            println!("{}", meal.instructions_or_default());
        }
    }
    Ok(())
}
