//! Todo Widget Entry Point

mod app;
mod components;
mod context;
mod controls;
mod logging;
mod options;
mod storage;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;
use options::WidgetOptions;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(LevelFilter::Info);

    let options = WidgetOptions::load_from_page();
    log::set_max_level(options.level_filter());

    mount_to_body(move || view! { <App options=options /> });
}
