//! Logging initialization.
//!
//! Installs a `tracing-subscriber` registry for the host app. The level is
//! controlled via `RUST_LOG` (default `info`); e.g.
//! `RUST_LOG=sideout_matchcore=debug` shows every point.

use std::str::FromStr;

use sideout_types::{Result, SideoutError};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable with colors.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
    /// Single-line, no colors.
    Compact,
}

impl FromStr for LogFormat {
    type Err = SideoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "compact" => Ok(Self::Compact),
            other => Err(SideoutError::Configuration(format!(
                "unknown log format: {other}"
            ))),
        }
    }
}

/// Install the global subscriber. Fails if one is already set.
pub fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = match format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(true).with_ansi(true))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_ansi(false))
            .try_init(),
    };

    installed.map_err(|e| SideoutError::Internal(format!("logging init failed: {e}")))
}
