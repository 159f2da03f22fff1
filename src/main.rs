//! Pricing Scheme Editor Entry Point

mod models;
mod error;
mod config;
mod editor;
mod gateway;
mod submit;
mod store;
mod logging;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init_logger(logging::default_level());
    mount_to_body(App);
}
