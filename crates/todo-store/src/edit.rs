//! Edit Session
//!
//! Transient state for the one item currently being edited.

use serde::{Deserialize, Serialize};

use crate::item::ItemId;

/// The item being edited and its unsaved text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditSession {
    pub id: ItemId,
    pub pending_text: String,
}

impl EditSession {
    pub fn new(id: ItemId, pending_text: impl Into<String>) -> Self {
        Self {
            id,
            pending_text: pending_text.into(),
        }
    }

    /// Trimmed pending text, or `None` if it is blank
    pub fn committed_text(&self) -> Option<&str> {
        let text = self.pending_text.trim();
        (!text.is_empty()).then_some(text)
    }
}

/// Result of confirming an edit session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Item text was replaced
    Saved { id: ItemId, text: String },
    /// Pending text was blank; the item is unchanged
    Discarded { id: ItemId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_committed_text_trims() {
        let session = EditSession::new(ItemId(1), "  buy milk \n");
        assert_eq!(session.committed_text(), Some("buy milk"));
    }

    #[test]
    fn test_committed_text_blank() {
        assert_eq!(EditSession::new(ItemId(1), "").committed_text(), None);
        assert_eq!(EditSession::new(ItemId(1), " \t ").committed_text(), None);
    }
}
