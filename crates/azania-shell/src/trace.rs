//! Tracing support.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeConsoleWriter;

/// Initialise tracing with default settings.
///
/// Events up to `level` are written to the browser console.
pub fn init_default(level: LevelFilter) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        // std::time is not available in browsers.
        .without_time()
        .with_writer(MakeConsoleWriter)
        .with_filter(level);

    tracing_subscriber::registry().with(fmt_layer).init();
}
