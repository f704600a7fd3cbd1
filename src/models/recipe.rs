use serde::{Deserialize, Serialize};

/// One repurposing recipe from the knowledge base file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,

    /// Lowercase ingredient keywords matched against logged food items.
    pub ingredients: Vec<String>,

    pub instructions: String,
}
