//! Browser Storage
//!
//! `window.localStorage` backend for the item store.

use todo_store::{ItemStorage, StoreError, StoreResult};
use wasm_bindgen::JsValue;

/// One key in the browser's local storage
#[derive(Debug, Clone)]
pub struct LocalStorage {
    key: String,
}

impl LocalStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn backend() -> StoreResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Storage("localStorage unavailable".to_string()))
    }
}

impl ItemStorage for LocalStorage {
    fn load(&self) -> StoreResult<Option<String>> {
        Self::backend()?.get_item(&self.key).map_err(js_error)
    }

    fn save(&self, raw: &str) -> StoreResult<()> {
        Self::backend()?.set_item(&self.key, raw).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> StoreError {
    StoreError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
