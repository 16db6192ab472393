//! Application Context
//!
//! Shared store and options provided via Leptos Context API.
//! Intent methods mutate the store inside the signal, so every change
//! persists and re-renders in one step.

use leptos::prelude::*;
use log::warn;
use todo_store::{ItemId, TodoItem, TodoStore};

use crate::controls::{ButtonKind, RowAction};
use crate::options::WidgetOptions;
use crate::storage::LocalStorage;

pub type Store = TodoStore<LocalStorage>;

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// The item store - read and write
    pub store: RwSignal<Store>,
    options: StoredValue<WidgetOptions>,
}

impl TodoContext {
    pub fn new(store: RwSignal<Store>, options: WidgetOptions) -> Self {
        Self {
            store,
            options: StoredValue::new(options),
        }
    }

    // ========================
    // Reactive reads
    // ========================

    pub fn items(&self) -> Vec<TodoItem> {
        self.store.with(|store| store.items().to_vec())
    }

    pub fn is_empty(&self) -> bool {
        self.store.with(|store| store.is_empty())
    }

    pub fn is_editing(&self) -> bool {
        self.store.with(|store| store.is_editing())
    }

    pub fn is_editing_item(&self, id: ItemId) -> bool {
        self.store.with(|store| store.is_editing_item(id))
    }

    pub fn pending_text(&self) -> String {
        self.store.with(|store| {
            store
                .edit_session()
                .map(|session| session.pending_text.clone())
                .unwrap_or_default()
        })
    }

    pub fn icon_size(&self) -> String {
        self.options.with_value(|options| options.icon_size.clone())
    }

    pub fn row_actions(&self) -> Vec<RowAction> {
        self.options.with_value(|options| options.row_actions())
    }

    // ========================
    // Intents
    // ========================

    /// Add an item; blank text is ignored
    pub fn add(&self, text: &str) {
        self.store.update(|store| {
            store.add(text);
        });
    }

    pub fn begin_edit(&self, id: ItemId) {
        self.store.update(|store| {
            if let Err(e) = store.begin_edit(id) {
                warn!("cannot edit {}: {}", id, e);
            }
        });
    }

    pub fn update_edit(&self, text: String) {
        self.store.update(|store| {
            if let Err(e) = store.update_edit(text) {
                warn!("cannot update edit: {}", e);
            }
        });
    }

    pub fn confirm_edit(&self) {
        self.store.update(|store| {
            if let Err(e) = store.confirm_edit() {
                warn!("cannot confirm edit: {}", e);
            }
        });
    }

    pub fn cancel_edit(&self) {
        self.store.update(|store| {
            store.cancel_edit();
        });
    }

    pub fn delete(&self, id: ItemId) {
        self.store.update(|store| {
            if let Err(e) = store.delete(id) {
                warn!("cannot delete {}: {}", id, e);
            }
        });
    }

    pub fn complete(&self, id: ItemId) {
        if let Err(e) = self.store.with_untracked(|store| store.complete(id)) {
            warn!("cannot complete {}: {}", id, e);
        }
    }

    /// Run the button an action slot currently shows for a row
    pub fn dispatch(&self, action: RowAction, id: ItemId) {
        let row_editing = self.store.with_untracked(|store| store.is_editing_item(id));
        match ButtonKind::for_action(action, row_editing) {
            ButtonKind::Delete => self.delete(id),
            ButtonKind::Edit => self.begin_edit(id),
            ButtonKind::ConfirmEdit => self.confirm_edit(),
            ButtonKind::Complete => self.complete(id),
        }
    }
}

/// Get the todo context
pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}
