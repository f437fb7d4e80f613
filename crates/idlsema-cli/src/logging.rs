use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr log subscriber.
///
/// `RUST_LOG` overrides the default filter, which only lets warnings through
/// (the enum range advisory among them).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
