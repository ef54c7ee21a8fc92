//! Logging configuration for the terminal client.
//!
//! Quiet by default so log lines don't interleave with the prompt;
//! raise with `RUST_LOG` (e.g. `RUST_LOG=mastermind=debug`). The fmt
//! subscriber's log bridge also captures the library's `log` records.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
