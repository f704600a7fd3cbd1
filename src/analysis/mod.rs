pub mod aggregate;
pub mod constants;
pub mod recommend;

pub use aggregate::{
    average_waste_percentage, compute_impact, compute_summary, total_waste_kg,
    totals_by_meal_time, totals_by_reason,
};
pub use constants::*;
pub use recommend::{generate_recommendations, leftover_action, retrieve_recipe, text_insights};
