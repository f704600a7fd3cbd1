use crate::models::{ImpactMetrics, MealTime, Reason, Recommendation, SummaryStats, WasteEntry};

/// Print the dashboard: headline stats, both category tables, and impact.
pub fn display_dashboard(
    summary: &SummaryStats,
    meal_totals: &[(MealTime, f64)],
    reason_totals: &[(Reason, f64)],
    impact: &ImpactMetrics,
) {
    println!();
    println!("=== Dashboard ===");
    println!();
    println!("Today's waste:      {:.1} kg", summary.today_waste_kg);
    println!("Weekly average:     {:.1} kg", summary.weekly_average_kg);
    println!(
        "Potential savings:  ${:.2} / month",
        summary.monthly_savings_estimate
    );

    println!();
    println!("--- Waste by Meal Time ---");
    for (meal, kg) in meal_totals {
        println!("  {:<10} {:>6.1} kg", meal.display_name(), kg);
    }

    println!();
    println!("--- Waste by Reason ---");
    for (reason, kg) in reason_totals {
        println!("  {:<15} {:>6.1} kg", reason.display_name(), kg);
    }

    println!();
    println!("--- Impact ---");
    println!("  Meals saved:    {}", impact.meals_saved);
    println!("  CO2 prevented:  {:.1} kg", impact.co2_saved_kg);
    println!("  Donated:        {:.1} kg", impact.donated_kg);
    println!("  Composted:      {:.1} kg", impact.composted_kg);
    println!();
}

/// Print rule-engine recommendations, bodies indented line by line.
pub fn display_recommendations(recommendations: &[Recommendation]) {
    println!("--- Suggestions ---");
    for rec in recommendations {
        println!();
        println!("  {}", rec.title);
        for line in rec.content.lines() {
            println!("    {}", line);
        }
    }
    println!();
}

/// Print the entry history, newest first.
pub fn display_history(entries: &[WasteEntry]) {
    if entries.is_empty() {
        println!("No records found. Log an entry to get started.");
        return;
    }

    println!();
    println!("=== History ({} entries) ===", entries.len());
    println!();

    let max_item_len = entries
        .iter()
        .map(|e| e.food_item.len())
        .max()
        .unwrap_or(10);

    for entry in entries.iter().rev() {
        println!(
            "{:>4}. {} | {:<9} | {:<width$} | {:>6.1} kg | {}",
            entry.id,
            entry.date,
            entry.meal_time,
            entry.food_item,
            entry.quantity_kg,
            entry.recorded_by.as_deref().unwrap_or("N/A"),
            width = max_item_len
        );
    }
    println!();
}

/// Print the insight lines from the rule engine.
pub fn display_insights(lines: &[String]) {
    println!();
    println!("=== Insights ===");
    println!();
    for line in lines {
        println!("  - {}", line);
    }
    println!();
}
