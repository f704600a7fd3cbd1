use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged waste event.
///
/// Entries are immutable once created and the log is append-only; ids are
/// assigned at creation and never reused. Category fields are stored as raw
/// labels so that out-of-set values survive loading; the analysis layer
/// parses them against the closed category enums and skips anything unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteEntry {
    pub id: u64,

    pub date: NaiveDate,

    pub meal_time: String,

    pub food_item: String,

    /// Mass prepared, in kg. Zero when the caller only tracks waste.
    #[serde(default)]
    pub produced_kg: f64,

    /// Waste (leftover) mass in kg.
    #[serde(rename = "leftover_kg")]
    pub quantity_kg: f64,

    pub reason: String,

    #[serde(rename = "diversion_type", default = "default_diversion")]
    pub diversion: String,

    #[serde(default)]
    pub recorded_by: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,
}

fn default_diversion() -> String {
    "disposed".to_string()
}

impl WasteEntry {
    /// Basic validation: non-negative masses and leftover within production
    /// when production is tracked. Applied at the logging boundary; loaded
    /// files are trusted as-is.
    pub fn is_valid(&self) -> bool {
        self.quantity_kg >= 0.0
            && self.produced_kg >= 0.0
            && (self.produced_kg == 0.0 || self.quantity_kg <= self.produced_kg)
    }

    /// Percentage of production that went to waste.
    ///
    /// Zero production yields 0.0 rather than NaN; display layers decide how
    /// to render the degenerate case.
    pub fn waste_percentage(&self) -> f64 {
        if self.produced_kg > 0.0 {
            (self.quantity_kg / self.produced_kg) * 100.0
        } else {
            0.0
        }
    }
}
