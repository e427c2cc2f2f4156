use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber: JSON output, `RUST_LOG`-style
/// filtering, `info` when no filter is set.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();
}
