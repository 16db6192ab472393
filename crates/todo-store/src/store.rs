//! Item Store
//!
//! Ordered list of items plus the edit session, mirrored to storage on
//! every change.

use log::{debug, info, warn};

use crate::codec;
use crate::config::StoreConfig;
use crate::edit::{EditOutcome, EditSession};
use crate::error::{StoreError, StoreResult};
use crate::item::{ItemId, TodoItem};
use crate::storage::ItemStorage;

/// The widget's single source of truth
#[derive(Debug)]
pub struct TodoStore<S: ItemStorage> {
    items: Vec<TodoItem>,
    editing: Option<EditSession>,
    next_id: u32,
    storage: S,
}

impl<S: ItemStorage> TodoStore<S> {
    /// Build a store over `texts` without reading or writing storage
    pub fn new<I, T>(storage: S, texts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let items: Vec<TodoItem> = texts
            .into_iter()
            .zip(1u32..)
            .map(|(text, id)| TodoItem::new(ItemId(id), text))
            .collect();

        Self {
            next_id: items.len() as u32 + 1,
            items,
            editing: None,
            storage,
        }
    }

    /// Load the persisted list, falling back to the configured seed.
    ///
    /// The loaded list is written back once so storage always holds the
    /// list the widget shows.
    pub fn open(storage: S, config: &StoreConfig) -> Self {
        let texts = match storage.load() {
            Ok(Some(raw)) if !raw.is_empty() => match codec::decode_items(&raw) {
                Ok(texts) => {
                    info!("loaded {} items from '{}'", texts.len(), config.storage_key);
                    texts
                }
                Err(e) => {
                    warn!("stored items under '{}' unreadable, using seed: {}", config.storage_key, e);
                    config.seed.clone()
                }
            },
            Ok(None) | Ok(Some(_)) => {
                info!("nothing stored under '{}', using seed", config.storage_key);
                config.seed.clone()
            }
            Err(e) => {
                warn!("failed to read '{}', using seed: {}", config.storage_key, e);
                config.seed.clone()
            }
        };

        let store = Self::new(storage, texts);
        store.persist();
        store
    }

    // ========================
    // Queries
    // ========================

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn texts(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Id of the item currently shown at `index`
    pub fn id_at(&self, index: usize) -> Option<ItemId> {
        self.items.get(index).map(|item| item.id)
    }

    /// Current position of an item
    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn is_editing_item(&self, id: ItemId) -> bool {
        self.editing.as_ref().is_some_and(|session| session.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ========================
    // Mutations
    // ========================

    /// Prepend the trimmed text. Blank input is ignored and returns `false`.
    pub fn add(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            debug!("ignoring blank item");
            return false;
        }

        let id = self.alloc_id();
        self.items.insert(0, TodoItem::new(id, text));
        debug!("added {} '{}'", id, text);
        self.persist();
        true
    }

    /// Start editing an item with its current text as the pending text
    pub fn begin_edit(&mut self, id: ItemId) -> StoreResult<()> {
        if let Some(session) = &self.editing {
            if session.id == id {
                return Ok(());
            }
            return Err(StoreError::EditInProgress(format!(
                "{} is being edited",
                session.id
            )));
        }

        let item = self.get(id).ok_or_else(|| not_found(id))?;
        self.editing = Some(EditSession::new(id, item.text.clone()));
        debug!("editing {}", id);
        Ok(())
    }

    /// Replace the pending text of the active session
    pub fn update_edit(&mut self, pending_text: impl Into<String>) -> StoreResult<()> {
        let session = self.editing.as_mut().ok_or(StoreError::NoActiveEdit)?;
        session.pending_text = pending_text.into();
        Ok(())
    }

    /// Commit the active session. Blank pending text discards the edit.
    pub fn confirm_edit(&mut self) -> StoreResult<EditOutcome> {
        let session = self.editing.take().ok_or(StoreError::NoActiveEdit)?;

        let Some(text) = session.committed_text() else {
            debug!("discarding blank edit of {}", session.id);
            return Ok(EditOutcome::Discarded { id: session.id });
        };

        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == session.id)
            .ok_or_else(|| not_found(session.id))?;
        item.text = text.to_string();
        debug!("saved {} '{}'", session.id, text);

        let outcome = EditOutcome::Saved {
            id: session.id,
            text: text.to_string(),
        };
        self.persist();
        Ok(outcome)
    }

    /// Drop the active session without committing
    pub fn cancel_edit(&mut self) -> bool {
        match self.editing.take() {
            Some(session) => {
                debug!("cancelled edit of {}", session.id);
                true
            }
            None => false,
        }
    }

    /// Remove an item, ending its edit session if it had one
    pub fn delete(&mut self, id: ItemId) -> StoreResult<()> {
        let index = self.index_of(id).ok_or_else(|| not_found(id))?;
        let removed = self.items.remove(index);
        if self.is_editing_item(id) {
            self.editing = None;
        }
        debug!("deleted {} '{}'", id, removed.text);
        self.persist();
        Ok(())
    }

    /// Mark an item complete. Only logs; the list is unchanged.
    pub fn complete(&self, id: ItemId) -> StoreResult<()> {
        let index = self.index_of(id).ok_or_else(|| not_found(id))?;
        info!("COMPLETE: {} {}", index, self.items[index].text);
        Ok(())
    }

    // ========================
    // Helpers
    // ========================

    fn alloc_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Best-effort write of the full list
    fn persist(&self) {
        let result = codec::encode_items(&self.texts()).and_then(|raw| self.storage.save(&raw));
        if let Err(e) = result {
            warn!("failed to persist {} items: {}", self.items.len(), e);
        }
    }
}

fn not_found(id: ItemId) -> StoreError {
    StoreError::NotFound(format!("item {}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store_with(texts: &[&str]) -> TodoStore<MemoryStorage> {
        TodoStore::new(MemoryStorage::new(), texts.iter().copied())
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = store_with(&["a", "b"]);
        store.add("c");
        let mut ids: Vec<_> = store.items().iter().map(|item| item.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = store_with(&["a"]);
        let first = store.id_at(0).expect("Missing item");
        store.delete(first).expect("Delete failed");
        store.add("b");
        assert_ne!(store.id_at(0), Some(first));
    }

    #[test]
    fn test_add_trims() {
        let mut store = store_with(&[]);
        assert!(store.add("  hello  "));
        assert_eq!(store.texts(), ["hello"]);
    }

    #[test]
    fn test_begin_edit_captures_text() {
        let mut store = store_with(&["a", "b"]);
        let id = store.id_at(1).expect("Missing item");
        store.begin_edit(id).expect("Begin edit failed");

        let session = store.edit_session().expect("No session");
        assert_eq!(session.id, id);
        assert_eq!(session.pending_text, "b");
        assert!(store.is_editing_item(id));
    }

    #[test]
    fn test_second_edit_rejected() {
        let mut store = store_with(&["a", "b"]);
        let a = store.id_at(0).expect("Missing item");
        let b = store.id_at(1).expect("Missing item");
        store.begin_edit(a).expect("Begin edit failed");

        assert!(matches!(store.begin_edit(b), Err(StoreError::EditInProgress(_))));
        assert!(store.is_editing_item(a));
    }

    #[test]
    fn test_begin_edit_same_item_keeps_pending_text() {
        let mut store = store_with(&["a"]);
        let a = store.id_at(0).expect("Missing item");
        store.begin_edit(a).expect("Begin edit failed");
        store.update_edit("draft").expect("Update failed");
        store.begin_edit(a).expect("Re-entering edit failed");

        assert_eq!(store.edit_session().map(|s| s.pending_text.as_str()), Some("draft"));
    }

    #[test]
    fn test_begin_edit_unknown_item() {
        let mut store = store_with(&["a"]);
        assert!(matches!(store.begin_edit(ItemId(99)), Err(StoreError::NotFound(_))));
        assert!(!store.is_editing());
    }

    #[test]
    fn test_update_without_session() {
        let mut store = store_with(&["a"]);
        assert_eq!(store.update_edit("x"), Err(StoreError::NoActiveEdit));
    }

    #[test]
    fn test_update_edit_does_not_touch_item() {
        let mut store = store_with(&["a"]);
        let a = store.id_at(0).expect("Missing item");
        store.begin_edit(a).expect("Begin edit failed");
        store.update_edit("changed").expect("Update failed");

        assert_eq!(store.texts(), ["a"]);
    }

    #[test]
    fn test_confirm_without_session() {
        let mut store = store_with(&["a"]);
        assert_eq!(store.confirm_edit(), Err(StoreError::NoActiveEdit));
    }

    #[test]
    fn test_cancel_edit() {
        let mut store = store_with(&["a"]);
        assert!(!store.cancel_edit());

        let a = store.id_at(0).expect("Missing item");
        store.begin_edit(a).expect("Begin edit failed");
        store.update_edit("changed").expect("Update failed");
        assert!(store.cancel_edit());

        assert!(!store.is_editing());
        assert_eq!(store.texts(), ["a"]);
    }

    #[test]
    fn test_delete_edited_item_clears_session() {
        let mut store = store_with(&["a", "b"]);
        let a = store.id_at(0).expect("Missing item");
        store.begin_edit(a).expect("Begin edit failed");
        store.delete(a).expect("Delete failed");

        assert!(!store.is_editing());
        assert_eq!(store.texts(), ["b"]);
    }

    #[test]
    fn test_delete_other_item_keeps_session() {
        let mut store = store_with(&["a", "b", "c"]);
        let a = store.id_at(0).expect("Missing item");
        let c = store.id_at(2).expect("Missing item");
        store.begin_edit(c).expect("Begin edit failed");
        store.update_edit("C").expect("Update failed");
        store.delete(a).expect("Delete failed");

        assert!(store.is_editing_item(c));
        store.confirm_edit().expect("Confirm failed");
        assert_eq!(store.texts(), ["b", "C"]);
    }

    #[test]
    fn test_delete_unknown_item() {
        let mut store = store_with(&["a"]);
        assert!(matches!(store.delete(ItemId(42)), Err(StoreError::NotFound(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_complete_is_read_only() {
        let store = store_with(&["a", "b"]);
        let b = store.id_at(1).expect("Missing item");
        store.complete(b).expect("Complete failed");
        assert_eq!(store.texts(), ["a", "b"]);
        assert!(store.storage().snapshot().is_none());
        assert!(matches!(store.complete(ItemId(42)), Err(StoreError::NotFound(_))));
    }
}
