pub mod analysis;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{AdvisorError, Result};
pub use models::{MealTime, Reason, WasteEntry};
