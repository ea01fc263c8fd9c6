//! Terminal User Interface for rewriting math word problems.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::RewriteApp`]
//! - **View**: Pure rendering from explicit state structs in [`state`]
//! - **Update**: Message-driven state transitions routed through an
//!   explicit event-to-handler table
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Input, display, toast, and in-flight state
//! - [`components`]: Stateless renderers
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Startup Settings
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, collaborators are handed over through module-level storage.
//! Call [`set_app_settings`] before starting the program, and
//! `RewriteApp::init()` will retrieve them.

use std::sync::{Arc, OnceLock};

use crate::clipboard::{ClipboardWriter, SystemClipboard};
use crate::config::default_themes;
use crate::rewrite::{DEFAULT_NUM_EXAMPLES, FixtureRewriteProvider, RetryPolicy, RewriteProvider};
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::RewriteApp;

/// Global storage for the app's collaborators and startup values.
///
/// This is set before the TUI program starts and read by `RewriteApp::init()`.
static APP_SETTINGS: OnceLock<AppSettings> = OnceLock::new();

/// Collaborators and startup values for [`RewriteApp`].
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Source of rewrites.
    pub provider: Arc<dyn RewriteProvider>,
    /// Clipboard used by the copy action.
    pub clipboard: Arc<dyn ClipboardWriter>,
    /// Sink for rewrite and copy events.
    pub telemetry: Arc<dyn TelemetrySink>,
    /// Retry policy in force for this run.
    pub retry_policy: RetryPolicy,
    /// Theme catalogue offered by the selector.
    pub themes: Vec<String>,
    /// Examples requested per rewrite.
    pub num_examples: u32,
    /// Ring the terminal bell after a successful copy.
    pub bell_on_copy: bool,
    /// Problem text to prefill instead of the built-in sample.
    pub initial_problem: Option<String>,
    /// Theme to preselect.
    pub initial_theme: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            provider: Arc::new(FixtureRewriteProvider::with_default_table()),
            clipboard: Arc::new(SystemClipboard::default()),
            telemetry: Arc::new(NoopTelemetrySink),
            retry_policy: RetryPolicy::Cyclic,
            themes: default_themes(),
            num_examples: DEFAULT_NUM_EXAMPLES,
            bell_on_copy: true,
            initial_problem: None,
            initial_theme: None,
        }
    }
}

/// Sets the collaborators for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. The
/// settings will be read by `RewriteApp::init()` when the program starts.
///
/// # Returns
///
/// `true` if the settings were stored, `false` if they were already set.
#[must_use]
pub fn set_app_settings(settings: AppSettings) -> bool {
    APP_SETTINGS.set(settings).is_ok()
}

/// Gets a clone of the stored settings, or the simulated defaults when none
/// were set.
pub(crate) fn get_app_settings() -> AppSettings {
    APP_SETTINGS.get().cloned().unwrap_or_default()
}
