use strsim::jaro_winkler;

use crate::analysis::aggregate::{compute_impact, totals_by_meal_time, totals_by_reason};
use crate::analysis::constants::*;
use crate::models::{Recipe, Recommendation, WasteEntry};

/// First maximal element in declared order.
///
/// Strict `>` means an earlier category keeps the win on ties, so the output
/// is deterministic for any input.
fn peak<C: Copy>(totals: &[(C, f64)]) -> Option<(C, f64)> {
    let mut best: Option<(C, f64)> = None;
    for &(category, total) in totals {
        match best {
            Some((_, best_total)) if total > best_total => best = Some((category, total)),
            None => best = Some((category, total)),
            _ => {}
        }
    }
    best
}

/// Rule-based suggestions derived from the aggregate totals.
///
/// Output order is significant: meal-time insight (if any waste was bucketed),
/// reason insight (same condition), then the static general tips.
pub fn generate_recommendations(entries: &[WasteEntry]) -> Vec<Recommendation> {
    if entries.is_empty() {
        return vec![Recommendation::new(NO_DATA_TITLE, NO_DATA_CONTENT)];
    }

    let mut recommendations = Vec::new();

    if let Some((meal, total)) = peak(&totals_by_meal_time(entries)) {
        if total > 0.0 {
            recommendations.push(Recommendation::new(
                format!("Focus on {}", meal.display_name()),
                format!(
                    "Most waste ({:.1}kg) occurs during {}. Consider adjusting portion \
                     sizes or preparation quantities.",
                    total,
                    meal.label()
                ),
            ));
        }
    }

    if let Some((reason, total)) = peak(&totals_by_reason(entries)) {
        if total > 0.0 {
            recommendations.push(Recommendation::new(
                format!("Addressing {}", reason.display_name()),
                format!(
                    "The main reason for waste is {} ({:.1}kg). {}",
                    reason.label(),
                    total,
                    reason_remedy(reason)
                ),
            ));
        }
    }

    recommendations.push(Recommendation::new(GENERAL_TIPS_TITLE, GENERAL_TIPS_CONTENT));
    recommendations
}

/// Search the knowledge base for a recipe matching a logged food item.
///
/// Substring match on ingredient keywords first, then a fuzzy pass per word
/// for near misses ("panner" vs "paneer").
pub fn retrieve_recipe<'a>(recipes: &'a [Recipe], food_item: &str) -> Option<&'a Recipe> {
    let item = food_item.to_lowercase();

    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            if item.contains(ingredient.as_str()) {
                return Some(recipe);
            }
        }
    }

    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            let fuzzy_hit = item
                .split_whitespace()
                .any(|word| jaro_winkler(word, ingredient) > RECIPE_MATCH_THRESHOLD);
            if fuzzy_hit {
                return Some(recipe);
            }
        }
    }

    None
}

/// Concrete action for a leftover item.
///
/// Precedence: knowledge-base recipe, then the fixed item remedies, then a
/// bulk-donation suggestion for large amounts, then a portion-control default.
pub fn leftover_action(food_item: &str, kg: f64, recipes: &[Recipe]) -> String {
    if let Some(recipe) = retrieve_recipe(recipes, food_item) {
        return format!(
            "Try '{}' - {} ({}kg saved)",
            recipe.name, recipe.instructions, kg
        );
    }

    let item = food_item.to_lowercase();
    if item.contains("rice") {
        return format!(
            "Repurpose into Fried Rice or lemon rice for the next snack session. ({kg}kg saved)"
        );
    }
    if item.contains("dal") {
        return format!(
            "Dehydrate for 'Dal Paratha' stuffing or donate to local shelters immediately. \
             ({kg}kg saved)"
        );
    }
    if item.contains("paneer") {
        return "Refrigerate and use as a topping for sandwiches or rolls tomorrow morning."
            .to_string();
    }
    if item.contains("poha") {
        return "Mix with fresh spices and vegetables for a quick cutlet base.".to_string();
    }

    if kg > BULK_DONATION_THRESHOLD_KG {
        return format!("Contact 'Hunger Relief Foundation' for immediate donation of {kg}kg.");
    }

    "Optimize serving size: Use smaller portion scoops to reduce individual plate waste."
        .to_string()
}

/// Insight lines for the insights view.
///
/// Mirrors the dashboard narrative: waste ratio, a concrete action for the
/// latest entry, recorder attribution, and the impact headlines.
pub fn text_insights(entries: &[WasteEntry], recipes: &[Recipe]) -> Vec<String> {
    let Some(latest) = entries.last() else {
        return vec!["Not enough data for analysis. Please input daily records.".to_string()];
    };

    let waste_pct = crate::analysis::aggregate::average_waste_percentage(entries);
    let impact = compute_impact(entries);

    vec![
        format!("Average waste percentage: {waste_pct:.1}%."),
        format!(
            "Key opportunity: {}",
            leftover_action(&latest.food_item, latest.quantity_kg, recipes)
        ),
        format!(
            "Staff '{}' recorded the latest efficiency check.",
            latest.recorded_by.as_deref().unwrap_or("Unknown")
        ),
        format!("Impact: {} meals saved via donation.", impact.meals_saved),
        format!(
            "Environment: prevented {:.1}kg of CO2 emissions.",
            impact.co2_saved_kg
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

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

    fn sample_recipes() -> Vec<Recipe> {
        vec![Recipe {
            name: "Fried Rice".to_string(),
            ingredients: vec!["rice".to_string()],
            instructions: "Stir-fry with vegetables and soy sauce.".to_string(),
        }]
    }

    #[test]
    fn test_empty_log_gives_single_placeholder() {
        let recs = generate_recommendations(&[]);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, NO_DATA_TITLE);
    }

    #[test]
    fn test_recommendation_order_and_content() {
        let entries = vec![
            entry("breakfast", "spoilage", 2.0),
            entry("breakfast", "overproduction", 3.0),
            entry("lunch", "leftovers", 1.0),
        ];

        let recs = generate_recommendations(&entries);
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].title, "Focus on Breakfast");
        assert!(recs[0].content.contains("5.0kg"));
        assert_eq!(recs[1].title, "Addressing Overproduction");
        assert!(recs[1].content.contains("3.0kg"));
        assert_eq!(recs[2].title, GENERAL_TIPS_TITLE);
    }

    #[test]
    fn test_tie_breaks_to_declared_order() {
        // breakfast and dinner tied at 2.0; spoilage and leftovers tied at 2.0
        let entries = vec![
            entry("dinner", "leftovers", 2.0),
            entry("breakfast", "spoilage", 2.0),
        ];

        let recs = generate_recommendations(&entries);
        assert_eq!(recs[0].title, "Focus on Breakfast");
        assert_eq!(recs[1].title, "Addressing Spoilage");
    }

    #[test]
    fn test_all_unknown_categories_still_get_general_tips() {
        // Nothing buckets, so no data-driven insights, but tips always close
        let entries = vec![entry("brunch", "theft", 2.0)];
        let recs = generate_recommendations(&entries);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, GENERAL_TIPS_TITLE);
    }

    #[test]
    fn test_retrieve_recipe_substring_and_fuzzy() {
        let recipes = sample_recipes();

        let hit = retrieve_recipe(&recipes, "Steamed Rice Bowl");
        assert_eq!(hit.map(|r| r.name.as_str()), Some("Fried Rice"));

        // Typo close enough for the fuzzy pass
        let fuzzy = retrieve_recipe(&recipes, "leftover rcie");
        assert!(fuzzy.is_some());

        assert!(retrieve_recipe(&recipes, "dal tadka").is_none());
    }

    #[test]
    fn test_leftover_action_precedence() {
        let recipes = sample_recipes();

        // Recipe beats the fixed table
        let action = leftover_action("rice", 2.0, &recipes);
        assert!(action.contains("Fried Rice"));
        assert!(action.contains("2kg saved"));

        // Fixed table when no recipe matches
        let action = leftover_action("dal fry", 3.0, &[]);
        assert!(action.contains("Dal Paratha"));

        // Bulk threshold
        let action = leftover_action("mixed curry", 12.0, &[]);
        assert!(action.contains("Hunger Relief Foundation"));

        // Default
        let action = leftover_action("mixed curry", 1.0, &[]);
        assert!(action.contains("smaller portion scoops"));
    }

    #[test]
    fn test_text_insights_shape() {
        assert_eq!(text_insights(&[], &[]).len(), 1);

        let mut latest = entry("lunch", "leftovers", 2.0);
        latest.produced_kg = 8.0;
        latest.recorded_by = Some("Asha".to_string());

        let lines = text_insights(&[latest], &[]);
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("25.0%"));
        assert!(lines[2].contains("Asha"));
    }
}
