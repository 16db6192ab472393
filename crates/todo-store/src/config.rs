//! Store Configuration

use serde::{Deserialize, Serialize};

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "items";

/// Seed list shown when storage holds nothing usable
pub const DEFAULT_ITEMS: &[&str] = &[
    "Walk the dog",
    "Buy groceries",
    "Call mom",
    "Read a chapter of a book",
    "Water the plants",
];

/// Where the list is persisted and what it starts from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Durable storage key holding the JSON array
    pub storage_key: String,
    /// Fallback items when the key is absent or unparsable
    pub seed: Vec<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed: DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
