//! Logging Setup
//!
//! Records go to stderr so `render` output stays clean on stdout.
//! `RUST_LOG` overrides the configured level.
//!
//! The configured subscriber can only be installed once the config is
//! known, so config loading runs under a scoped bootstrap subscriber.

use tracing::Subscriber;
use tracing_subscriber::{
    fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::config::LoggingConfig;

const BOOTSTRAP_FILTER: &str = "weatherdeck=info";

/// `RUST_LOG`, falling back to `default`
fn env_filter_or(default: impl Into<String>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default.into()))
}

/// Plain fmt subscriber writing to `writer`
pub fn bootstrap_subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
}

/// Run `f` with a stderr subscriber active for the current thread only
pub fn with_bootstrap<T>(f: impl FnOnce() -> T) -> T {
    let subscriber = bootstrap_subscriber(env_filter_or(BOOTSTRAP_FILTER), std::io::stderr);
    tracing::subscriber::with_default(subscriber, f)
}

/// Install the global subscriber described by `logging`
pub fn init(logging: &LoggingConfig) {
    let filter = env_filter_or(format!("weatherdeck={},tower_http=debug", logging.level));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
