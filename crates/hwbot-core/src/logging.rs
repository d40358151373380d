use std::{
    env,
    ffi::OsStr,
    io::{self, IsTerminal},
};

use tracing_subscriber::{fmt, EnvFilter};

use crate::{Error, Result};

/// Initialize logging for the bot.
///
/// Lines go to stdout with timestamp, level and source line. Colors only
/// when stdout is a terminal and `NO_COLOR` is unset.
pub fn init(service_name: &str) -> Result<()> {
    // Default: info for our crates, warn for everything else.
    // Can be overridden with `RUST_LOG`.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,hwbot_core=info,hwbot_practicum=info,hwbot_telegram=info,{service_name}=info"
        ))
    });

    let no_color = env::var_os("NO_COLOR");
    let ansi = ansi_enabled(io::stdout().is_terminal(), no_color.as_deref());

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stdout)
        .with_target(false)
        .with_line_number(true)
        .with_ansi(ansi)
        .try_init()
        .map_err(|e| Error::External(format!("logging init failed: {e}")))
}

fn ansi_enabled(stdout_is_terminal: bool, no_color: Option<&OsStr>) -> bool {
    let no_color = no_color.is_some_and(|v| !v.is_empty());
    stdout_is_terminal && !no_color
}
