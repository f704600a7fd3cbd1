use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};

use crate::error::{AdvisorError, Result};
use crate::models::{Diversion, MealTime, Reason, WasteEntry};

fn prompt_date(today: NaiveDate) -> Result<NaiveDate> {
    let input: String = Input::new()
        .with_prompt("Date (YYYY-MM-DD)")
        .default(today.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| AdvisorError::InvalidInput(format!("Invalid date: {input}")))
}

fn prompt_meal_time() -> Result<MealTime> {
    let options: Vec<&str> = MealTime::ALL.iter().map(|m| m.display_name()).collect();
    let selection = Select::new()
        .with_prompt("Meal time")
        .items(&options)
        .default(0)
        .interact()?;
    Ok(MealTime::ALL[selection])
}

fn prompt_reason() -> Result<Reason> {
    let options: Vec<&str> = Reason::ALL.iter().map(|r| r.display_name()).collect();
    let selection = Select::new()
        .with_prompt("Reason for waste")
        .items(&options)
        .default(0)
        .interact()?;
    Ok(Reason::ALL[selection])
}

fn prompt_diversion() -> Result<Diversion> {
    let options: Vec<&str> = Diversion::ALL.iter().map(|d| d.display_name()).collect();
    let selection = Select::new()
        .with_prompt("Where did the leftover go?")
        .items(&options)
        .default(Diversion::ALL.len() - 1) // disposed
        .interact()?;
    Ok(Diversion::ALL[selection])
}

fn prompt_mass(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let mass: f64 = input
        .trim()
        .parse()
        .map_err(|_| AdvisorError::InvalidInput("Invalid number".to_string()))?;

    if mass < 0.0 {
        return Err(AdvisorError::InvalidInput(
            "Mass must be non-negative".to_string(),
        ));
    }

    Ok(mass)
}

fn prompt_optional_text(prompt: &str) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

/// Interactive form for one waste entry.
///
/// Validates at this boundary (non-negative masses, leftover within
/// production); the analysis layer trusts whatever it receives.
pub fn collect_waste_entry(next_id: u64, today: NaiveDate) -> Result<WasteEntry> {
    let date = prompt_date(today)?;
    let meal_time = prompt_meal_time()?;

    let food_item: String = Input::new()
        .with_prompt("Food item")
        .interact_text()?;
    let food_item = food_item.trim().to_string();
    if food_item.is_empty() {
        return Err(AdvisorError::InvalidInput(
            "Food item must not be empty".to_string(),
        ));
    }

    let produced_kg = prompt_mass("Amount produced (kg, 0 if untracked)", "0")?;
    let quantity_kg = prompt_mass("Amount wasted (kg)", "0")?;

    if produced_kg > 0.0 && quantity_kg > produced_kg {
        return Err(AdvisorError::InvalidInput(
            "Wasted amount cannot exceed produced amount".to_string(),
        ));
    }

    let reason = prompt_reason()?;
    let diversion = prompt_diversion()?;
    let recorded_by = prompt_optional_text("Recorded by (optional)")?;
    let notes = prompt_optional_text("Notes (optional)")?;

    Ok(WasteEntry {
        id: next_id,
        date,
        meal_time: meal_time.label().to_string(),
        food_item,
        produced_kg,
        quantity_kg,
        reason: reason.label().to_string(),
        diversion: diversion.label().to_string(),
        recorded_by,
        notes,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
