use clap::{Parser, Subcommand};

/// EcoWasteAdvisor — log food waste, see where it happens, and get suggestions.
#[derive(Parser, Debug)]
#[command(name = "eco_waste_advisor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the waste log CSV file.
    #[arg(short, long, default_value = "waste_log.csv")]
    pub file: String,

    /// Path to the recipe knowledge base JSON file.
    #[arg(long, default_value = "recipes.json")]
    pub recipes: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show summary stats, category totals, impact, and suggestions.
    Dashboard,

    /// Log a new waste entry interactively.
    Log,

    /// List all logged entries, newest first.
    History,

    /// Show text insights and a concrete action for the latest entry.
    Insights,
}

impl Default for Command {
    fn default() -> Self {
        Command::Dashboard
    }
}
