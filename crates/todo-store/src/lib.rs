//! Todo Store
//!
//! Platform-independent state for the todo list widget:
//! - item: items with stable ids
//! - edit: the single in-progress edit session
//! - storage: injected key-value persistence and the JSON codec
//! - store: the item store tying them together

mod config;
mod edit;
mod error;
mod item;
mod store;

pub mod codec;
pub mod storage;


pub use config::{StoreConfig, DEFAULT_ITEMS, DEFAULT_STORAGE_KEY};
pub use edit::{EditOutcome, EditSession};
pub use error::{StoreError, StoreResult};
pub use item::{ItemId, TodoItem};
pub use storage::{ItemStorage, MemoryStorage};
pub use store::TodoStore;
