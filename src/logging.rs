//! Tracing setup
//!
//! The terminal belongs to the TUI, so interactive sessions log to a file in
//! the temp dir. Headless runs log to stderr. `RUST_LOG` overrides the
//! default filter in both cases.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::utils;

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to the debug file; `debug` raises the default level from warn to debug
pub fn init_file(debug: bool) -> Result<()> {
    let path = utils::get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log {}", path.display()))?;

    let default = if debug { "globetui=debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(env_filter(default))
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .init();

    Ok(())
}

/// Log to stderr, compact format
pub fn init_stderr(debug: bool) {
    let default = if debug { "globetui=debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(env_filter(default))
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
