//! Portfolio site entry point.

mod app;
mod components;
mod config;
mod hooks;
mod utils;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let Some(root) = utils::dom::html_element_by_id("app") else {
        utils::dom::warn("index.html has no #app element; nothing to mount");
        return;
    };

    mount_to(root, App).forget();
}
