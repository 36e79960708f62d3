use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use souschef_core::execution::ExecutionSession;
use souschef_core::normalize::{parse_backend_id, to_display, to_wire};
use souschef_core::store::{HttpStore, RecipeStore};
use souschef_core::wire::Category;
use souschef_core::{display, wire};

#[derive(Parser)]
#[command(name = "souschef")]
#[command(about = "Souschef CLI", long_about = None)]
struct Cli {
    /// Backend API base URL
    #[arg(long, global = true, default_value = "http://localhost:8080/api")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all recipes
    List,
    /// Show one recipe as display-shaped JSON
    Show { id: String },
    /// Search recipes by title
    Search { title: String },
    /// List recipes in a category (PASTA, MEAT, VEGETARIAN, DESSERT, SOUP, SALAD)
    Category { category: String },
    /// Create a recipe from a display-shaped JSON file
    Create {
        /// Path to the recipe JSON
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete a recipe
    Delete { id: String },
    /// Step through a recipe interactively
    Cook { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let store = HttpStore::new(&cli.server)?;

    match cli.command {
        Commands::List => {
            print_recipes(&store.list().await?);
        }
        Commands::Show { id } => {
            let recipe = store.get(parse_backend_id(&id)?).await?;
            println!("{}", serde_json::to_string_pretty(&to_display(&recipe))?);
        }
        Commands::Search { title } => {
            print_recipes(&store.search(&title).await?);
        }
        Commands::Category { category } => {
            let category: Category = category.to_ascii_uppercase().parse()?;
            print_recipes(&store.by_category(category).await?);
        }
        Commands::Create { file } => {
            let json = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let recipe: display::Recipe = serde_json::from_str(&json)?;
            let created = store.create(to_wire(&recipe)?).await?;
            let id = created.id.map(|id| id.to_string()).unwrap_or_default();
            println!("Created recipe {} ({})", id, created.title);
        }
        Commands::Delete { id } => {
            let backend_id = parse_backend_id(&id)?;
            store.delete(backend_id).await?;
            println!("Deleted recipe {}", id);
        }
        Commands::Cook { id } => {
            let recipe = store.get(parse_backend_id(&id)?).await?;
            cook(&to_display(&recipe))?;
        }
    }

    Ok(())
}

fn print_recipes(recipes: &[wire::Recipe]) {
    for recipe in recipes {
        let display = to_display(recipe);
        println!(
            "{:>4}  {}  [{}] {} - {} min, {} steps",
            display.id,
            display.name,
            display.category,
            display.difficulty,
            display.total_time_minutes,
            display.steps.len()
        );
    }
}

/// Interactive cook-along loop: one card per step, Enter advances.
fn cook(recipe: &display::Recipe) -> Result<()> {
    let mut session = ExecutionSession::new(recipe);
    let stdin = io::stdin();

    while let Some(step) = session.current_step() {
        println!();
        println!(
            "{} - step {} of {}",
            recipe.name,
            session.current_step_index() + 1,
            session.total_steps()
        );
        println!(
            "[{:.0}%] {} / {} minutes",
            session.progress_percent(),
            session.time_elapsed(),
            recipe.total_time_minutes
        );
        println!();
        println!("{} ({} min)", step.title, step.duration_minutes);
        println!("{}", step.description);
        if let Some(next) = session.upcoming_step() {
            println!();
            println!("Next up: {}", next.title);
        }

        print!("\nPress Enter when done... ");
        io::stdout().flush()?;
        let mut line = String::new();
        stdin.lock().read_line(&mut line)?;

        session.advance();
    }

    println!();
    println!(
        "Done! You finished {} ({} minutes).",
        recipe.name, recipe.total_time_minutes
    );
    Ok(())
}
