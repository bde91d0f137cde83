//! Tracing subscriber setup.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to `info` when unset or
/// unparseable.
pub fn init_logger() {
    let filter = env_filter(LevelFilter::INFO);
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

fn env_filter(default_level: LevelFilter) -> EnvFilter {
    let rust_log =
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| default_level.to_string());
    EnvFilter::try_new(&rust_log).unwrap_or_else(|err| {
        eprintln!(
            "invalid {}={rust_log:?}, falling back to level '{default_level}': {err}",
            EnvFilter::DEFAULT_ENV,
        );
        EnvFilter::new(default_level.to_string())
    })
}
