use serde::Serialize;

/// Headline dashboard statistics derived from the full entry log.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Waste logged on the reference day, in kg (1 decimal).
    pub today_waste_kg: f64,

    /// Total waste divided by a flat 7-day window, in kg (1 decimal).
    pub weekly_average_kg: f64,

    /// Flat monthly savings projection in currency units (2 decimals).
    pub monthly_savings_estimate: f64,
}

/// One rule-engine suggestion shown on the insights panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub content: String,
}

impl Recommendation {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Environmental and social impact derived from diverted leftovers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImpactMetrics {
    pub donated_kg: f64,
    pub composted_kg: f64,
    pub animal_feed_kg: f64,

    /// Meals covered by donated food, at a fixed portion size per meal.
    pub meals_saved: u32,

    /// CO2-equivalent kept out of landfill by donation and composting.
    pub co2_saved_kg: f64,
}
