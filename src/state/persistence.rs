use std::fs::{self, OpenOptions};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::Result;
use crate::models::{Recipe, WasteEntry};

/// Load the waste log from a CSV file.
///
/// A missing file is an empty log, not an error.
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<WasteEntry>> {
    if !path.as_ref().exists() {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut entries = Vec::new();
    for record in reader.deserialize() {
        entries.push(record?);
    }
    Ok(entries)
}

/// Append one entry to the CSV file, creating it with headers when absent.
pub fn append_entry<P: AsRef<Path>>(path: P, entry: &WasteEntry) -> Result<()> {
    let path = path.as_ref();
    let is_new = !path.exists();

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = WriterBuilder::new().has_headers(is_new).from_writer(file);
    writer.serialize(entry)?;
    writer.flush()?;
    Ok(())
}

/// Rewrite the full log to a CSV file.
pub fn save_entries<P: AsRef<Path>>(path: P, entries: &[WasteEntry]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(true).from_path(path)?;
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}

/// Load the recipe knowledge base from a JSON file.
///
/// A missing file degrades to an empty knowledge base so that leftover
/// actions fall back to the fixed remedy table.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    if !path.as_ref().exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let recipes: Vec<Recipe> = serde_json::from_str(&content)?;
    Ok(recipes)
}
