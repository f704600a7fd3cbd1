use chrono::NaiveDate;

use crate::analysis::constants::*;
use crate::models::{Diversion, ImpactMetrics, MealTime, Reason, SummaryStats, WasteEntry};

/// Round to one decimal for display values.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimals for currency values.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Total waste mass across all entries, category validity irrelevant.
pub fn total_waste_kg(entries: &[WasteEntry]) -> f64 {
    entries.iter().map(|e| e.quantity_kg).sum()
}

/// Per-meal-time waste totals in declared category order.
///
/// Every category starts at 0; entries whose label is outside the declared
/// set are skipped rather than rejected.
pub fn totals_by_meal_time(entries: &[WasteEntry]) -> [(MealTime, f64); 3] {
    let mut totals = MealTime::ALL.map(|meal| (meal, 0.0));
    for entry in entries {
        if let Some(meal) = MealTime::from_label(&entry.meal_time) {
            if let Some(slot) = totals.iter_mut().find(|(m, _)| *m == meal) {
                slot.1 += entry.quantity_kg;
            }
        }
    }
    totals
}

/// Per-reason waste totals in declared category order.
pub fn totals_by_reason(entries: &[WasteEntry]) -> [(Reason, f64); 4] {
    let mut totals = Reason::ALL.map(|reason| (reason, 0.0));
    for entry in entries {
        if let Some(reason) = Reason::from_label(&entry.reason) {
            if let Some(slot) = totals.iter_mut().find(|(r, _)| *r == reason) {
                slot.1 += entry.quantity_kg;
            }
        }
    }
    totals
}

/// Headline dashboard stats for the given reference day.
///
/// The weekly average divides the all-time total by a flat 7 and the savings
/// projection multiplies it out at a flat unit price; both are intentional
/// simplifications carried over from the product. Accumulation is full
/// precision, rounding happens once at the end.
pub fn compute_summary(entries: &[WasteEntry], today: NaiveDate) -> SummaryStats {
    if entries.is_empty() {
        return SummaryStats::default();
    }

    let today_waste: f64 = entries
        .iter()
        .filter(|e| e.date == today)
        .map(|e| e.quantity_kg)
        .sum();

    let total = total_waste_kg(entries);
    let weekly_average = total / WEEKLY_DIVISOR;
    let monthly_savings = total * MONTH_WEEKS * UNIT_PRICE_PER_KG;

    SummaryStats {
        today_waste_kg: round1(today_waste),
        weekly_average_kg: round1(weekly_average),
        monthly_savings_estimate: round2(monthly_savings),
    }
}

/// Impact metrics from diverted leftovers.
///
/// Entries with an unrecognized diversion label count toward nothing here,
/// mirroring the category tolerance of the totals above.
pub fn compute_impact(entries: &[WasteEntry]) -> ImpactMetrics {
    let mut donated = 0.0;
    let mut composted = 0.0;
    let mut animal_feed = 0.0;

    for entry in entries {
        match Diversion::from_label(&entry.diversion) {
            Some(Diversion::Donated) => donated += entry.quantity_kg,
            Some(Diversion::Compost) => composted += entry.quantity_kg,
            Some(Diversion::AnimalFeed) => animal_feed += entry.quantity_kg,
            Some(Diversion::Disposed) | None => {}
        }
    }

    ImpactMetrics {
        donated_kg: donated,
        composted_kg: composted,
        animal_feed_kg: animal_feed,
        meals_saved: (donated / MEAL_PORTION_KG) as u32,
        co2_saved_kg: (donated + composted) * CO2_PER_KG_DIVERTED,
    }
}

/// Waste as a percentage of total production across all entries.
///
/// Returns 0.0 when no production was recorded, never NaN.
pub fn average_waste_percentage(entries: &[WasteEntry]) -> f64 {
    let produced: f64 = entries.iter().map(|e| e.produced_kg).sum();
    if produced > 0.0 {
        (total_waste_kg(entries) / produced) * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(meal: &str, reason: &str, kg: f64) -> WasteEntry {
        WasteEntry {
            id: 0,
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            meal_time: meal.to_string(),
            food_item: "Rice".to_string(),
            produced_kg: 0.0,
            quantity_kg: kg,
            reason: reason.to_string(),
            diversion: "disposed".to_string(),
            recorded_by: None,
            notes: None,
        }
    }

    #[test]
    fn test_totals_empty() {
        let meal_totals = totals_by_meal_time(&[]);
        assert_eq!(meal_totals.map(|(_, kg)| kg), [0.0, 0.0, 0.0]);

        let reason_totals = totals_by_reason(&[]);
        assert_eq!(reason_totals.map(|(_, kg)| kg), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_totals_declared_order() {
        let entries = vec![entry("dinner", "other", 1.0), entry("breakfast", "spoilage", 2.0)];
        let totals = totals_by_meal_time(&entries);

        assert_eq!(totals[0].0, MealTime::Breakfast);
        assert_eq!(totals[1].0, MealTime::Lunch);
        assert_eq!(totals[2].0, MealTime::Dinner);
        assert_eq!(totals.map(|(_, kg)| kg), [2.0, 0.0, 1.0]);
    }

    #[test]
    fn test_unknown_category_skipped_but_counted_elsewhere() {
        let entries = vec![entry("brunch", "spoilage", 3.0)];

        // Not bucketed anywhere in the meal dimension
        let meal_totals = totals_by_meal_time(&entries);
        assert_eq!(meal_totals.map(|(_, kg)| kg), [0.0, 0.0, 0.0]);

        // Still counted in the other dimension and in quantity-only sums
        let reason_totals = totals_by_reason(&entries);
        assert_eq!(reason_totals[1], (Reason::Spoilage, 3.0));
        assert_eq!(total_waste_kg(&entries), 3.0);
    }

    #[test]
    fn test_summary_empty() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        assert_eq!(compute_summary(&[], today), SummaryStats::default());
    }

    #[test]
    fn test_summary_today_is_calendar_day_match() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let mut yesterday = entry("lunch", "leftovers", 4.0);
        yesterday.date = NaiveDate::from_ymd_opt(2026, 3, 13).unwrap();

        let entries = vec![entry("lunch", "leftovers", 2.0), yesterday];
        let summary = compute_summary(&entries, today);

        assert_eq!(summary.today_waste_kg, 2.0);
    }

    #[test]
    fn test_summary_fixed_divisor_and_unit_price() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let entries = vec![entry("lunch", "leftovers", 14.0)];
        let summary = compute_summary(&entries, today);

        assert_eq!(summary.weekly_average_kg, 2.0);
        assert_eq!(summary.monthly_savings_estimate, 560.0);
    }

    #[test]
    fn test_summary_rounding() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let entries = vec![entry("lunch", "leftovers", 1.0), entry("dinner", "other", 0.25)];
        let summary = compute_summary(&entries, today);

        // 1.25 / 7 = 0.17857... -> 0.2
        assert_eq!(summary.weekly_average_kg, 0.2);
        assert_eq!(summary.today_waste_kg, 1.3);
    }

    #[test]
    fn test_impact_metrics() {
        let mut donated = entry("lunch", "overproduction", 2.0);
        donated.diversion = "donated".to_string();
        let mut composted = entry("dinner", "spoilage", 1.0);
        composted.diversion = "compost".to_string();
        let disposed = entry("breakfast", "other", 5.0);

        let impact = compute_impact(&[donated, composted, disposed]);
        assert_eq!(impact.donated_kg, 2.0);
        assert_eq!(impact.composted_kg, 1.0);
        assert_eq!(impact.meals_saved, 5); // 2.0 / 0.4
        assert!((impact.co2_saved_kg - 7.5).abs() < 0.001);
    }

    #[test]
    fn test_average_waste_percentage_sentinel() {
        assert_eq!(average_waste_percentage(&[]), 0.0);

        let no_production = vec![entry("lunch", "leftovers", 2.0)];
        assert_eq!(average_waste_percentage(&no_production), 0.0);

        let mut tracked = entry("lunch", "leftovers", 2.0);
        tracked.produced_kg = 8.0;
        assert!((average_waste_percentage(&[tracked]) - 25.0).abs() < 0.001);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let entries = vec![
            entry("breakfast", "spoilage", 2.0),
            entry("lunch", "leftovers", 1.0),
        ];
        assert_eq!(totals_by_meal_time(&entries), totals_by_meal_time(&entries));
        assert_eq!(totals_by_reason(&entries), totals_by_reason(&entries));

        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        assert_eq!(compute_summary(&entries, today), compute_summary(&entries, today));
    }
}
