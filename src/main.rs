//! Espaço Sow Frontend Entry Point

mod app;
mod components;
mod context;
mod format;
mod logger;
mod storage;

use app::App;
use espacosow_core::StorageConfig;
use leptos::prelude::*;
use storage::BrowserStorage;

fn main() {
    console_error_panic_hook::set_once();

    let level = BrowserStorage::new().log_level(&StorageConfig::default());
    logger::init(logger::parse_level(level.as_deref()));

    mount_to_body(App);
}
