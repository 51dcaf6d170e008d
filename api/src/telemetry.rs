//! Log output for the api binaries and the integration tests.
//!
//! `RUST_LOG` overrides the default filter. actix's own server lifecycle
//! messages (worker start/stop) are kept at `warn` by default since every
//! spawned test app would otherwise print them.

use anyhow::Context;
use tracing::Subscriber;
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Log an error with its whole chain.
pub fn log_error(e: &anyhow::Error) {
    tracing::error!("{e:#}");
}

fn default_directives(level: &str) -> String {
    format!("{level},actix_server=warn")
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

/// Pretty output on stderr, with a line when each request span closes.
pub fn get_subscriber(level: &str) -> impl Subscriber + Sync + Send + use<> {
    let stderr = fmt::Layer::new()
        .with_writer(std::io::stderr)
        .pretty()
        .with_span_events(fmt::format::FmtSpan::CLOSE);
    Registry::default().with(env_filter(level)).with(stderr)
}

/// Compact output through the test harness, so it is only shown for
/// failing tests.
pub fn get_test_subscriber(level: &str) -> impl Subscriber + Sync + Send + use<> {
    let captured = fmt::Layer::new().compact().with_test_writer();
    Registry::default().with(env_filter(level)).with(captured)
}

/// Install a subscriber for the process, forwarding `log` records to it.
///
/// Fails if a subscriber is already installed.
pub fn init_subscriber(
    subscriber: impl Subscriber + Sync + Send,
) -> anyhow::Result<()> {
    LogTracer::init().context("Failed to set logger")?;
    set_global_default(subscriber).context("Failed to set subscriber")?;
    Ok(())
}
