use tracing_subscriber::EnvFilter;

/// Crate log level for a `-v` count, used when `RUST_LOG` is unset.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "wordtext=off",
        1 => "wordtext=info",
        2 => "wordtext=debug",
        _ => "wordtext=trace",
    }
}

/// Install the stderr subscriber. Calling it twice is harmless.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
