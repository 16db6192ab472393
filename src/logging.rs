//! Console Logging
//!
//! Routes `log` records to the browser console as `[TAG] message`.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// `log` backend writing to `web_sys::console`
pub struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", tag(record.target()), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Later calls only adjust the level.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// Last module path segment, upper-cased: `todo_store::store` -> `STORE`
fn tag(target: &str) -> String {
    target.rsplit("::").next().unwrap_or(target).to_uppercase()
}
