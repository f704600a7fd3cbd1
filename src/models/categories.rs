use serde::{Deserialize, Serialize};

/// Meal time a waste entry belongs to.
///
/// Declared order is significant: category totals are reported in this order,
/// and ties between equal totals resolve to the earlier variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealTime {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealTime {
    pub const ALL: [MealTime; 3] = [MealTime::Breakfast, MealTime::Lunch, MealTime::Dinner];

    /// Canonical lowercase label used in stored entries.
    pub fn label(&self) -> &'static str {
        match self {
            MealTime::Breakfast => "breakfast",
            MealTime::Lunch => "lunch",
            MealTime::Dinner => "dinner",
        }
    }

    /// Capitalized label for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            MealTime::Breakfast => "Breakfast",
            MealTime::Lunch => "Lunch",
            MealTime::Dinner => "Dinner",
        }
    }

    /// Parse a stored label. Unknown labels return `None` so that aggregation
    /// can skip them instead of failing the whole load.
    pub fn from_label(label: &str) -> Option<MealTime> {
        match label.trim().to_lowercase().as_str() {
            "breakfast" => Some(MealTime::Breakfast),
            "lunch" => Some(MealTime::Lunch),
            "dinner" => Some(MealTime::Dinner),
            _ => None,
        }
    }
}

/// Reason a waste entry was logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reason {
    Overproduction,
    Spoilage,
    Leftovers,
    Other,
}

impl Reason {
    pub const ALL: [Reason; 4] = [
        Reason::Overproduction,
        Reason::Spoilage,
        Reason::Leftovers,
        Reason::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Reason::Overproduction => "overproduction",
            Reason::Spoilage => "spoilage",
            Reason::Leftovers => "leftovers",
            Reason::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Reason::Overproduction => "Overproduction",
            Reason::Spoilage => "Spoilage",
            Reason::Leftovers => "Leftovers",
            Reason::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Reason> {
        match label.trim().to_lowercase().as_str() {
            "overproduction" => Some(Reason::Overproduction),
            "spoilage" => Some(Reason::Spoilage),
            "leftovers" => Some(Reason::Leftovers),
            "other" => Some(Reason::Other),
            _ => None,
        }
    }
}

/// Where a leftover ended up. Drives the impact metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diversion {
    Donated,
    Compost,
    AnimalFeed,
    Disposed,
}

impl Diversion {
    pub const ALL: [Diversion; 4] = [
        Diversion::Donated,
        Diversion::Compost,
        Diversion::AnimalFeed,
        Diversion::Disposed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Diversion::Donated => "donated",
            Diversion::Compost => "compost",
            Diversion::AnimalFeed => "animal feed",
            Diversion::Disposed => "disposed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Diversion::Donated => "Donated",
            Diversion::Compost => "Compost",
            Diversion::AnimalFeed => "Animal Feed",
            Diversion::Disposed => "Disposed",
        }
    }

    pub fn from_label(label: &str) -> Option<Diversion> {
        match label.trim().to_lowercase().as_str() {
            "donated" => Some(Diversion::Donated),
            "compost" => Some(Diversion::Compost),
            "animal feed" => Some(Diversion::AnimalFeed),
            "disposed" => Some(Diversion::Disposed),
            _ => None,
        }
    }
}
