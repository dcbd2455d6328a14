//! Logging integration.
//!
//! Provides a helper for configuring `tracing`-based logging in hosts and
//! test harnesses. The engine itself only emits events; installing a
//! subscriber is the embedding application's choice.

/// Sets up a global tracing subscriber with the given filter directive
/// (e.g. "debug", "formvalidate_engine=trace").
///
/// Invalid directives fall back to "info". Calling this when a subscriber
/// is already installed is a no-op.
pub fn setup_logging(filter: &str) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .ok();
}
