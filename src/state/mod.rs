mod manager;
mod persistence;

pub use manager::WasteLogManager;
pub use persistence::{append_entry, load_entries, load_recipes, save_entries};
