//! Tracing initialization.
//!
//! Diagnostics always go to stderr; stdout belongs to the program's output.

use crate::ColorWhen;
use anyhow::{anyhow, Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// - Respects `RUST_LOG` via `EnvFilter`, falling back to `default_directive`
///   (e.g. `"warn"`) when it is unset or unparsable.
/// - ANSI color controlled by `ColorWhen`, evaluated against stderr.
/// - Fails instead of panicking if a subscriber is already installed.
pub fn init_tracing(color: ColorWhen, default_directive: &str) -> Result<()> {
    // ---
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive)
            .with_context(|| format!("invalid log directive {default_directive:?}"))?,
    };

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(color.should_color_stderr())
        .try_init()
        .map_err(|e| anyhow!("failed to initialize tracing: {e}"))?;

    Ok(())
}
