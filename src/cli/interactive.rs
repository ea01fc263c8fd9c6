//! TUI mode for rewriting problems interactively.
//!
//! This module provides the entry point for the terminal user interface.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use reframe::clipboard::SystemClipboard;
use reframe::telemetry::TracingTelemetrySink;
use reframe::tui::{AppSettings, RewriteApp, set_app_settings};
use reframe::{ReframeConfig, RewriteError};

use super::provider::build_provider;

/// Runs the TUI.
///
/// # Errors
///
/// Returns an error if:
/// - The provider, retry policy, or theme catalogue is misconfigured
/// - The TUI fails to initialise or exits abnormally
pub async fn run(config: &ReframeConfig) -> Result<(), RewriteError> {
    let settings = build_settings(config)?;
    tracing::info!(
        provider = %settings.provider.describe(),
        retry_policy = %settings.retry_policy,
        "starting interactive mode"
    );

    // RewriteApp::init() reads the settings from module-level storage.
    if !set_app_settings(settings) {
        tracing::debug!("app settings were already set; keeping the existing ones");
    }

    run_tui().await.map_err(|error| RewriteError::Tui {
        message: error.to_string(),
    })
}

fn build_settings(config: &ReframeConfig) -> Result<AppSettings, RewriteError> {
    Ok(AppSettings {
        provider: build_provider(config)?,
        clipboard: Arc::new(SystemClipboard::default()),
        telemetry: Arc::new(TracingTelemetrySink),
        retry_policy: config.retry_policy()?,
        themes: config.theme_catalogue()?,
        num_examples: config.num_examples,
        bell_on_copy: !config.no_beep,
        initial_problem: config.problem.clone(),
        initial_theme: config.theme.clone(),
    })
}

/// Runs the bubbletea-rs program with the `RewriteApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<RewriteApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
