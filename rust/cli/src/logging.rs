//! Tracing setup for the binary.

/// Initialize logging for the application. Diagnostics from the parser core
/// (skipped lines, dropped hands) surface as `railbird_parser` warn events;
/// override with `RUST_LOG` as usual.
pub fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,railbird_parser=warn"));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    // A second init (e.g. in tests) is harmless.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
