use tracing_subscriber::EnvFilter;

/// Initialise logging. The default level is `info`; the persisted
/// `debug_logging` setting raises it to `debug`, in which case `RUST_LOG`
/// may override the filter entirely.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        // Force `info` regardless of RUST_LOG so a stray environment
        // variable cannot make release runs verbose.
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
