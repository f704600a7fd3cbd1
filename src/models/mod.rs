mod categories;
mod entry;
mod recipe;
mod report;

pub use categories::{Diversion, MealTime, Reason};
pub use entry::WasteEntry;
pub use recipe::Recipe;
pub use report::{ImpactMetrics, Recommendation, SummaryStats};
