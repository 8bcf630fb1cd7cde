// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tracing setup for the command-line tool.

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a stderr subscriber. `RUST_LOG` wins when set; otherwise the
/// level is `warn`, or `debug` for this crate with `verbose`.
pub fn init_tracing(verbose: bool) -> Result<()> {
    let fallback = if verbose {
        "warn,operator_locales=debug"
    } else {
        "warn"
    };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .map_err(|err| anyhow!("invalid log filter: {err}"))?;

    // stdout carries command output; logs go to stderr only.
    let fmt_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|err| anyhow!("installing tracing subscriber: {err}"))
}
