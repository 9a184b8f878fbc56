#![allow(warnings)]
//! Yarko Gorod Frontend Entry Point

mod app;
mod config;
mod dom;
mod enhance;
mod host;
mod modal;

use app::App;
use config::SiteConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn init_logging(level_name: &str) {
    let level = console_logger::parse_level(level_name);
    if console_logger::init(level.unwrap_or(LevelFilter::Info)).is_err() {
        return;
    }
    if level.is_none() {
        log::warn!("unknown log level {:?}, using info", level_name);
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let loaded = SiteConfig::from_host();
    let config = loaded.clone().ok().flatten().unwrap_or_default();
    init_logging(&config.log_level);
    if let Err(err) = loaded {
        log::warn!("window.{} ignored: {}", config::SITE_CONFIG_GLOBAL, err);
    }

    dom::when_ready(move || mount_to_body(move || view! { <App config=config /> }));
}
