//! Tracing subscriber setup for the command-line front-end.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact stderr logger. `RUST_LOG` overrides the default filter.
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "beach_or_nah_lib=debug,beach_or_nah=debug,info"
    } else {
        "beach_or_nah_lib=info,beach_or_nah=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
