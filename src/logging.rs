//! Tracing subscriber setup.
//!
//! An interactive session owns the terminal in raw mode, so log lines can
//! only go to a file there. Piped sessions may log to stderr.

use crate::config::LoggingConfig;
use crate::error::ReplError;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Where log output goes for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    /// No subscriber is installed.
    Disabled,
}

/// Pick the log destination for the given session kind.
pub fn log_target(config: &LoggingConfig, interactive: bool) -> LogTarget {
    match (&config.file, interactive) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, false) => LogTarget::Stderr,
        (None, true) => LogTarget::Disabled,
    }
}

/// Install the global tracing subscriber.
pub fn init_logging(config: &LoggingConfig, interactive: bool) -> Result<LogTarget, ReplError> {
    let target = log_target(config, interactive);
    if target == LogTarget::Disabled {
        return Ok(target);
    }

    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| ReplError::Logging(format!("invalid filter `{}`: {e}", config.filter)))?;

    let result = match &target {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(true),
                )
                .try_init()
        }
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init(),
        LogTarget::Disabled => Ok(()),
    };
    result.map_err(|e| ReplError::Logging(e.to_string()))?;
    Ok(target)
}
