use crate::models::WasteEntry;

/// Append-only, in-memory waste log.
///
/// Passed explicitly into the analysis functions; there is no ambient global
/// state. Entries are never updated or deleted once appended.
pub struct WasteLogManager {
    entries: Vec<WasteEntry>,
}

impl WasteLogManager {
    /// Create a manager from entries loaded out of the store.
    pub fn new(entries: Vec<WasteEntry>) -> Self {
        Self { entries }
    }

    /// Ordered view of all entries, oldest first.
    pub fn entries(&self) -> &[WasteEntry] {
        &self.entries
    }

    /// Append one entry to the log.
    pub fn append(&mut self, entry: WasteEntry) {
        self.entries.push(entry);
    }

    /// The most recently appended entry.
    pub fn latest(&self) -> Option<&WasteEntry> {
        self.entries.last()
    }

    /// Next id to assign: one past the highest id seen so far.
    pub fn next_id(&self) -> u64 {
        self.entries.iter().map(|e| e.id).max().map_or(1, |id| id + 1)
    }

    /// Total waste mass across the log.
    pub fn total_waste_kg(&self) -> f64 {
        self.entries.iter().map(|e| e.quantity_kg).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
