//! Logging bootstrap for the command-line front end.
//!
//! The library only emits through the `log` facade; the binary calls
//! [`init_logging`] once to route records to stderr.
//!
//! # Invariants
//! - Initialization happens at most once per process.
//! - A failed initialization never aborts the program.

use anyhow::{Context, Result};
use flexi_logger::{Logger, LoggerHandle};
use std::sync::OnceLock;

/// Environment variable holding the log specification, e.g. `info` or `moodlog=debug`
pub const LOG_ENV_VAR: &str = "MOODLOG_LOG";

const DEFAULT_LEVEL: &str = "warn";

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

/// Resolve the log specification from `MOODLOG_LOG`, falling back to `warn`
pub fn log_spec() -> String {
    std::env::var(LOG_ENV_VAR)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}

/// Start logging to stderr with the given specification
///
/// Calling this again after a successful start is a no-op.
pub fn init_logging(spec: &str) -> Result<()> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let handle = Logger::try_with_str(spec)
        .with_context(|| format!("invalid log specification `{}`", spec))?
        .log_to_stderr()
        .format_for_stderr(flexi_logger::default_format)
        .start()
        .context("failed to start logger")?;

    let _ = LOGGER.set(handle);
    log::debug!(
        "event=logging_init module=logging status=ok spec={} version={}",
        spec,
        env!("CARGO_PKG_VERSION")
    );
    Ok(())
}
