#![deny(clippy::all)]
#![deny(missing_debug_implementations)]

use azania_shell::components::NavItem;
use azania_shell::{trace, Renderer, ShellConfig};
use tracing::level_filters::LevelFilter;

mod pages;
mod resolver;
use resolver::AcademyPages;

fn main() {
    let config = ShellConfig::from_document();

    // Setup Logging
    let level = config.level_filter();
    trace::init_default(*level.as_ref().unwrap_or(&LevelFilter::INFO));

    if let Err(e) = level {
        tracing::warn!("{}, logging at info level", e);
    }

    // Start Application
    Renderer::new(AcademyPages)
        .config(config)
        .nav([
            NavItem::new("Home", "/"),
            NavItem::new("About", "/about"),
            NavItem::new("Programs", "/programs"),
            NavItem::new("Contact", "/contact"),
        ])
        .render();
}
