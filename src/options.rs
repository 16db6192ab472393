//! Widget Options
//!
//! Cosmetic and storage settings, optionally read from a JSON script tag
//! in the host page.

use log::{info, warn, LevelFilter};
use serde::{Deserialize, Serialize};
use todo_store::StoreConfig;

use crate::controls::{dedup_actions, RowAction};

/// Id of the `<script type="application/json">` element holding overrides
pub const CONFIG_ELEMENT_ID: &str = "todo-widget-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetOptions {
    pub store: StoreConfig,
    /// CSS font size of the action glyphs
    pub icon_size: String,
    /// Per-row buttons, left to right
    pub actions: Vec<RowAction>,
    pub log_level: String,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            icon_size: "1.75em".to_string(),
            actions: vec![RowAction::Delete, RowAction::Edit, RowAction::Complete],
            log_level: "info".to_string(),
        }
    }
}

impl WidgetOptions {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| e.to_string())
    }

    /// Options from the host page, defaults if absent or invalid
    pub fn load_from_page() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(raw) = raw else {
            info!("no #{} element, using default options", CONFIG_ELEMENT_ID);
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(options) => options,
            Err(e) => {
                warn!("invalid #{} ({}), using default options", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    pub fn row_actions(&self) -> Vec<RowAction> {
        dedup_actions(&self.actions)
    }
}
