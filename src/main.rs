//! Reframe CLI entrypoint.
//!
//! Loads configuration, installs logging, and dispatches to the operation
//! mode: service status check, one-shot rewrite, or the interactive TUI.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use reframe::logging::{LogTarget, init_logging};
use reframe::{OperationMode, ReframeConfig, RewriteError};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), RewriteError> {
    let config = load_config()?;
    let mode = config.operation_mode();
    init_logging(&LogTarget::select(config.log_file.as_deref(), mode))?;

    match mode {
        OperationMode::ServiceStatus => cli::service_status::run(&config).await,
        OperationMode::OneShot => cli::one_shot::run(&config).await,
        OperationMode::Interactive => cli::interactive::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`RewriteError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ReframeConfig, RewriteError> {
    ReframeConfig::load().map_err(|error| RewriteError::Configuration {
        message: error.to_string(),
    })
}
