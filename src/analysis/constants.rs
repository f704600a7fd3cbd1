use crate::models::Reason;

/// Flat divisor turning the all-time total into a "weekly" average.
///
/// Deliberately not a calendar-aware 7-day window; kept as the product
/// shipped it.
pub const WEEKLY_DIVISOR: f64 = 7.0;

/// Weeks per month used in the savings projection.
pub const MONTH_WEEKS: f64 = 4.0;

/// Flat unit price per kg of waste, in currency units.
pub const UNIT_PRICE_PER_KG: f64 = 10.0;

/// Approximate portion size of one served meal, in kg.
pub const MEAL_PORTION_KG: f64 = 0.4;

/// CO2-equivalent prevented per kg diverted from landfill.
pub const CO2_PER_KG_DIVERTED: f64 = 2.5;

/// Leftover mass above which a bulk donation is suggested.
pub const BULK_DONATION_THRESHOLD_KG: f64 = 10.0;

/// Minimum similarity for a fuzzy recipe-ingredient match.
pub const RECIPE_MATCH_THRESHOLD: f64 = 0.85;

/// Placeholder recommendation shown before any entry exists.
pub const NO_DATA_TITLE: &str = "No data yet";
pub const NO_DATA_CONTENT: &str =
    "Start logging food waste to receive personalized recommendations.";

/// Static closing recommendation, independent of the data.
pub const GENERAL_TIPS_TITLE: &str = "General Waste Reduction Tips";
pub const GENERAL_TIPS_CONTENT: &str = "1. Train staff on portion control.\n\
    2. Implement a food waste tracking system.\n\
    3. Donate excess food to local shelters when possible.\n\
    4. Compost food waste to reduce landfill impact.";

/// Canned remedy for the dominant waste reason.
pub fn reason_remedy(reason: Reason) -> &'static str {
    match reason {
        Reason::Overproduction => {
            "Consider implementing better demand forecasting or preparing smaller batches."
        }
        Reason::Spoilage => {
            "Review food storage practices and consider using a first-in-first-out (FIFO) system."
        }
        Reason::Leftovers => "Offer smaller portion sizes or create a plan to repurpose leftovers.",
        Reason::Other => "Review the reasons for waste in the logs to identify patterns.",
    }
}
