//! Tracing subscriber installation.
//!
//! Library code only emits `tracing` events. The binary decides where they
//! go: a log file when configured, stderr for the non-interactive modes, and
//! nowhere for the TUI without a log file, since stderr output would corrupt
//! the alternate screen.

use std::fs::OpenOptions;
use std::sync::Mutex;

use camino::{Utf8Path, Utf8PathBuf};
use tracing_subscriber::EnvFilter;

use crate::config::OperationMode;
use crate::error::RewriteError;

/// Default filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Destination chosen for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to the given file.
    File(Utf8PathBuf),
    /// Write to stderr.
    Stderr,
    /// Install no subscriber.
    Disabled,
}

impl LogTarget {
    /// Picks the destination for `mode`, preferring `log_file` when set.
    #[must_use]
    pub fn select(log_file: Option<&str>, mode: OperationMode) -> Self {
        match (log_file.filter(|path| !path.trim().is_empty()), mode) {
            (Some(path), _) => Self::File(Utf8PathBuf::from(path)),
            (None, OperationMode::Interactive) => Self::Disabled,
            (None, OperationMode::OneShot | OperationMode::ServiceStatus) => Self::Stderr,
        }
    }
}

/// Installs the global subscriber for `target`.
///
/// The filter comes from `RUST_LOG`, defaulting to [`DEFAULT_LOG_FILTER`].
///
/// # Errors
///
/// Returns [`RewriteError::Io`] when the log file cannot be opened, or
/// [`RewriteError::Configuration`] when a subscriber is already installed.
pub fn init_logging(target: &LogTarget) -> Result<(), RewriteError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let installed = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|error| RewriteError::Configuration {
        message: format!("failed to install log subscriber: {error}"),
    })
}

fn open_log_file(path: &Utf8Path) -> Result<std::fs::File, RewriteError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_std_path())
        .map_err(|error| RewriteError::Io {
            message: format!("failed to open log file {path}: {error}"),
        })
}
