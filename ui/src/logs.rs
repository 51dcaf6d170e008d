//! Logging to the javascript console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Used unless `UI_LOG` is set at build time. Request outcomes from the
/// helper are logged at debug.
const DEFAULT_DIRECTIVES: &str = "error,ui=debug,http_request=debug";

fn log_directives(build_time: Option<&'static str>) -> &'static str {
    build_time
        .filter(|directives| EnvFilter::try_new(directives).is_ok())
        .unwrap_or(DEFAULT_DIRECTIVES)
}

/// Install the console subscriber. Called once, before the app renders.
pub fn init_logging() {
    let directives = log_directives(option_env!("UI_LOG"));

    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_target(true)
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    tracing_subscriber::registry()
        .with(EnvFilter::new(directives))
        .with(console)
        .init();

    tracing::info!(filter = directives, "Initialized logs");
}
