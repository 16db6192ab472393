//! Todo Item
//!
//! A single text entry with a session-stable identifier.

use serde::{Deserialize, Serialize};

/// Identifier assigned to an item when it enters the store.
///
/// Ids are never reused within a session and are not persisted; the stored
/// form is the bare list of texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A todo entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: ItemId,
    pub text: String,
}

impl TodoItem {
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self { id, text: text.into() }
    }
}
