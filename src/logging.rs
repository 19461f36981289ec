//! Diagnostic logging to stderr via `tracing`
//!
//! Priority: `RUST_LOG` env var > `--debug` > default "warn".
//! Nothing in the crate logs above debug, so a default run writes no log lines.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn default_directive(debug: bool) -> &'static str {
    if debug { "warn,chatmate=debug" } else { "warn" }
}

pub(crate) fn init(debug: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .ok();
}
