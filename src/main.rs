//! Tasklist Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logging;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, problems) = config::load();
    logging::init(config.log_level());
    for problem in problems {
        log::warn!("[APP] ignoring configuration: {}", problem);
    }
    log::info!("[APP] tasks resource at {}", config.base_url());

    mount_to_body(move || view! { <App config=config /> });
}
