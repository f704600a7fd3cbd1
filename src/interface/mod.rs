pub mod prompts;
pub mod render;

pub use prompts::{collect_waste_entry, prompt_yes_no};
pub use render::{display_dashboard, display_history, display_insights, display_recommendations};
