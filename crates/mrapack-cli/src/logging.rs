//! Tracing subscriber setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a given verbosity.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "mrapack_texture=debug,mrapack_cli=debug"
    } else {
        "warn"
    }
}

/// Install the global tracing subscriber.
///
/// Log lines go to stderr so stdout stays clean for `--json` output.
/// `RUST_LOG` takes precedence over `verbose`.
pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    // A subscriber may already be installed (tests); keep the existing one
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init();
}
