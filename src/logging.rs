use tracing_subscriber::EnvFilter;

/// Initialise logging. Defaults to `info`; `debug` can be enabled via the
/// settings file, in which case `RUST_LOG` may override the level.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        // Force `info` regardless of `RUST_LOG` so a stray environment
        // variable cannot make release runs verbose.
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
