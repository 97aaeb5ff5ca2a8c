//! Tracing subscriber setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set. Otherwise storefront crates log at `info`, or
/// `debug` with `--verbose`. Logs go to stderr so `--json` output on stdout
/// stays machine-readable.
pub fn init(verbose: bool, json: bool) {
    let level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // target matching is by prefix, so this covers every storefront crate
        EnvFilter::new(format!("warn,storefront={level}"))
    });

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(verbose)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("failed to install tracing subscriber: {e}");
    }
}
