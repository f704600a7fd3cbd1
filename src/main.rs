use chrono::Local;
use clap::Parser;
use std::path::Path;

use eco_waste_advisor_rs::analysis::{
    compute_impact, compute_summary, generate_recommendations, text_insights,
    totals_by_meal_time, totals_by_reason,
};
use eco_waste_advisor_rs::cli::{Cli, Command};
use eco_waste_advisor_rs::error::Result;
use eco_waste_advisor_rs::interface::{
    collect_waste_entry, display_dashboard, display_history, display_insights,
    display_recommendations, prompt_yes_no,
};
use eco_waste_advisor_rs::state::{append_entry, load_entries, load_recipes, WasteLogManager};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Dashboard => cmd_dashboard(&cli.file),
        Command::Log => cmd_log(&cli.file),
        Command::History => cmd_history(&cli.file),
        Command::Insights => cmd_insights(&cli.file, &cli.recipes),
    }
}

/// Show summary stats, category totals, impact metrics, and suggestions.
fn cmd_dashboard(file_path: &str) -> Result<()> {
    let entries = load_entries(Path::new(file_path))?;
    let manager = WasteLogManager::new(entries);

    if manager.is_empty() {
        println!("No entries yet in {}. Use 'log' to record one.", file_path);
    }

    let today = Local::now().date_naive();
    let summary = compute_summary(manager.entries(), today);
    let meal_totals = totals_by_meal_time(manager.entries());
    let reason_totals = totals_by_reason(manager.entries());
    let impact = compute_impact(manager.entries());

    display_dashboard(&summary, &meal_totals, &reason_totals, &impact);
    display_recommendations(&generate_recommendations(manager.entries()));

    Ok(())
}

/// Interactively record one waste entry and append it to the log file.
fn cmd_log(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);
    let manager = WasteLogManager::new(load_entries(path)?);

    let today = Local::now().date_naive();
    let entry = collect_waste_entry(manager.next_id(), today)?;

    println!();
    println!(
        "{} | {} | {} | {:.1} kg wasted ({})",
        entry.date, entry.meal_time, entry.food_item, entry.quantity_kg, entry.reason
    );

    let save = prompt_yes_no("Save this entry?", true)?;
    if !save {
        println!("Entry discarded.");
        return Ok(());
    }

    append_entry(path, &entry)?;
    println!("Waste logged successfully!");

    Ok(())
}

/// List all logged entries, newest first.
fn cmd_history(file_path: &str) -> Result<()> {
    let entries = load_entries(Path::new(file_path))?;
    display_history(&entries);
    Ok(())
}

/// Show insight lines and impact-driven headlines.
fn cmd_insights(file_path: &str, recipes_path: &str) -> Result<()> {
    let entries = load_entries(Path::new(file_path))?;
    let recipes = load_recipes(Path::new(recipes_path))?;

    let lines = text_insights(&entries, &recipes);
    display_insights(&lines);
    display_recommendations(&generate_recommendations(&entries));

    Ok(())
}
