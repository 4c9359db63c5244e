mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process;

use crate::commands::{
    cmd_clear, cmd_day, cmd_favorite_add, cmd_favorite_list, cmd_favorite_remove,
    cmd_favorite_toggle, cmd_plan_add, cmd_plan_edit, cmd_plan_remove, cmd_shopping_generate,
    cmd_shopping_show, cmd_week,
};
use crate::config::Config;
use platter_core::store::PlanStore;

#[derive(Parser)]
#[command(
    name = "platter",
    version,
    about = "A simple weekly meal planner CLI",
    long_about = "\n\n  ██████╗ ██╗      █████╗ ████████╗████████╗███████╗██████╗
  ██╔══██╗██║     ██╔══██╗╚══██╔══╝╚══██╔══╝██╔════╝██╔══██╗
  ██████╔╝██║     ███████║   ██║      ██║   █████╗  ██████╔╝
  ██╔═══╝ ██║     ██╔══██║   ██║      ██║   ██╔══╝  ██╔══██╗
  ██║     ███████╗██║  ██║   ██║      ██║   ███████╗██║  ██║
  ╚═╝     ╚══════╝╚═╝  ╚═╝   ╚═╝      ╚═╝   ╚══════╝╚═╝  ╚═╝
        plan the week, shop once.
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage planned meals
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Show one day's plan (defaults to today)
    Day {
        /// Date to show (YYYY-MM-DD or today/yesterday/tomorrow, default: today)
        date: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Select and show the week containing a date (defaults to this week)
    Week {
        /// Any date in the week (YYYY-MM-DD or today/yesterday/tomorrow, default: today)
        date: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage favorite meals
    Favorite {
        #[command(subcommand)]
        command: FavoriteCommands,
    },
    /// Generate and show the weekly shopping list
    Shopping {
        #[command(subcommand)]
        command: ShoppingCommands,
    },
    /// Delete all planned weeks, favorites, and the shopping list
    Clear {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum PlanCommands {
    /// Plan a meal for a day's slot
    Add {
        /// Meal name
        name: String,
        /// Meal slot: breakfast, lunch, dinner, snack
        #[arg(short, long)]
        meal: String,
        /// Date to plan for (YYYY-MM-DD or today/yesterday/tomorrow, default: today)
        #[arg(long)]
        date: Option<String>,
        /// Ingredient as "<amount> <unit> <name>" (e.g. "200 g flour"); repeatable
        #[arg(short, long = "ingredient")]
        ingredients: Vec<String>,
        /// Meal description
        #[arg(long)]
        description: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit a planned meal everywhere it appears (matched by id)
    Edit {
        /// Meal id to edit
        meal_id: String,
        /// New meal name
        #[arg(long)]
        name: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a meal from every plan slot (favorites keep their copy)
    Remove {
        /// Meal id to remove
        meal_id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum FavoriteCommands {
    /// Save a meal to favorites
    Add {
        /// Meal id
        meal_id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a meal from favorites
    Remove {
        /// Meal id
        meal_id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Toggle a meal's favorite status
    Toggle {
        /// Meal id
        meal_id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List favorite meals
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum ShoppingCommands {
    /// Aggregate the current week's ingredients into a shopping list
    Generate {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the last generated shopping list
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    // The store is owned here and passed down; nothing global.
    let mut store = PlanStore::open(config.plan_path);

    match cli.command {
        Commands::Plan { command } => match command {
            PlanCommands::Add {
                name,
                meal,
                date,
                ingredients,
                description,
                json,
            } => cmd_plan_add(&mut store, &name, &meal, date, &ingredients, description, json),
            PlanCommands::Edit {
                meal_id,
                name,
                description,
                json,
            } => cmd_plan_edit(&mut store, &meal_id, name, description, json),
            PlanCommands::Remove { meal_id, json } => cmd_plan_remove(&mut store, &meal_id, json),
        },
        Commands::Day { date, json } => cmd_day(&mut store, date, json),
        Commands::Week { date, json } => cmd_week(&mut store, date, json),
        Commands::Favorite { command } => match command {
            FavoriteCommands::Add { meal_id, json } => cmd_favorite_add(&mut store, &meal_id, json),
            FavoriteCommands::Remove { meal_id, json } => {
                cmd_favorite_remove(&mut store, &meal_id, json)
            }
            FavoriteCommands::Toggle { meal_id, json } => {
                cmd_favorite_toggle(&mut store, &meal_id, json)
            }
            FavoriteCommands::List { json } => cmd_favorite_list(&store, json),
        },
        Commands::Shopping { command } => match command {
            ShoppingCommands::Generate { json } => cmd_shopping_generate(&mut store, json),
            ShoppingCommands::Show { json } => cmd_shopping_show(&store, json),
        },
        Commands::Clear { yes, json } => cmd_clear(&mut store, yes, json),
    }
}
