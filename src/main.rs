//! Grocery List Frontend Entry Point

mod storage;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    init_logging();
    mount_to_body(App);
}

/// Route `log` records (store warnings included) to the browser console
fn init_logging() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"[APP] logger already installed".into());
    }
}
