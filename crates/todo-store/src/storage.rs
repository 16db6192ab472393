//! Storage Abstraction
//!
//! Durable key-value persistence for the serialized list.
//! Implementations can use browser local storage, memory, etc.

use std::sync::Mutex;

use crate::error::{StoreError, StoreResult};

/// A single durable slot holding the encoded list
pub trait ItemStorage: Send + Sync {
    /// Read the raw stored value, `None` if nothing was stored yet
    fn load(&self) -> StoreResult<Option<String>>;

    /// Overwrite the stored value
    fn save(&self, raw: &str) -> StoreResult<()>;
}

/// In-memory storage for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryStorage {
    value: Mutex<Option<String>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with a raw value
    pub fn with_value(raw: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(raw.into())),
            read_only: false,
        }
    }

    /// Storage that rejects every write
    pub fn read_only(raw: Option<String>) -> Self {
        Self {
            value: Mutex::new(raw),
            read_only: true,
        }
    }

    /// Current raw value
    pub fn snapshot(&self) -> Option<String> {
        self.value.lock().ok().and_then(|v| v.clone())
    }
}

impl ItemStorage for MemoryStorage {
    fn load(&self) -> StoreResult<Option<String>> {
        let value = self
            .value
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        Ok(value.clone())
    }

    fn save(&self, raw: &str) -> StoreResult<()> {
        if self.read_only {
            return Err(StoreError::Storage("storage is read-only".to_string()));
        }
        let mut value = self
            .value
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        *value = Some(raw.to_string());
        Ok(())
    }
}

impl<T: ItemStorage + ?Sized> ItemStorage for std::sync::Arc<T> {
    fn load(&self) -> StoreResult<Option<String>> {
        (**self).load()
    }

    fn save(&self, raw: &str) -> StoreResult<()> {
        (**self).save(raw)
    }
}
