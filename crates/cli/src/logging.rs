use tracing_subscriber::EnvFilter;

const FALLBACK_FILTER: &str = "warn";

/// Diagnostics go to stderr so stdout only carries progress and the summary.
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
