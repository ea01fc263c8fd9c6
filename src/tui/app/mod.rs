//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! rewrite TUI. It owns the explicit state structs, routes messages to
//! handlers, and spawns the async rewrite and clipboard commands.
//!
//! # Module Structure
//!
//! - `model_impl`: `bubbletea_rs::Model` implementation and viewport
//!   normalisation
//! - `routing`: Event-to-handler table and category dispatch
//! - `input_handlers`: Problem editing and theme selection
//! - `rewrite_handlers`: Submit and rewrite completion
//! - `retry_handlers`: Retry theme selection
//! - `clipboard_handlers`: Copy, toast, and bell
//! - `timer_handlers`: Success indicator and toast timers
//! - `lifecycle_handlers`: Startup, quit, help, and resize
//! - `rendering`: View rendering methods for terminal output

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::clipboard::ClipboardWriter;
use crate::rewrite::{RetryPolicy, RewriteProvider};
use crate::telemetry::TelemetrySink;

use super::AppSettings;
use super::state::{DisplayState, INITIAL_PROBLEM, InFlight, InputPanelState, ToastState};

mod clipboard_handlers;
mod input_handlers;
mod lifecycle_handlers;
mod model_impl;
mod rendering;
mod retry_handlers;
mod rewrite_handlers;
mod routing;
mod timer_handlers;

pub use routing::{HANDLER_TABLE, UiHandler, handler_for};

/// Status line content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    /// Informational notice.
    Notice(String),
    /// Failure the user should see.
    Error(String),
}

impl StatusMessage {
    /// Message text without decoration.
    #[must_use]
    pub const fn text(&self) -> &str {
        match self {
            Self::Notice(text) | Self::Error(text) => text.as_str(),
        }
    }
}

/// Main application model for the rewrite TUI.
#[derive(Debug)]
pub struct RewriteApp {
    provider: Arc<dyn RewriteProvider>,
    clipboard: Arc<dyn ClipboardWriter>,
    telemetry: Arc<dyn TelemetrySink>,
    retry_policy: RetryPolicy,
    num_examples: u32,
    bell_on_copy: bool,
    rng: StdRng,
    /// Problem text and theme selector.
    pub(crate) input: InputPanelState,
    /// Displayed record.
    pub(crate) display: DisplayState,
    /// Generation of the most recent success indicator.
    pub(crate) success_generation: u64,
    /// Copy confirmation toast.
    pub(crate) toast: ToastState,
    /// Outstanding request, if any.
    pub(crate) in_flight: Option<InFlight>,
    /// Current status line, if any.
    pub(crate) status: Option<StatusMessage>,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Whether the next frame rings the terminal bell.
    pub(crate) bell_pending: bool,
    has_initialized: bool,
    width: u16,
    height: u16,
}

impl RewriteApp {
    /// Creates an application from `settings`.
    ///
    /// The input is prefilled with the configured problem or the built-in
    /// sample, and the results region shows that problem with an empty
    /// rewrite.
    #[must_use]
    pub fn new(settings: AppSettings) -> Self {
        let problem = settings
            .initial_problem
            .unwrap_or_else(|| INITIAL_PROBLEM.to_owned());
        let mut input = InputPanelState::new(settings.themes).with_problem(problem.as_str());
        if let Some(theme) = settings.initial_theme.as_deref() {
            input = input.with_theme(theme);
        }

        Self {
            provider: settings.provider,
            clipboard: settings.clipboard,
            telemetry: settings.telemetry,
            retry_policy: settings.retry_policy,
            num_examples: settings.num_examples,
            bell_on_copy: settings.bell_on_copy,
            rng: StdRng::from_entropy(),
            display: DisplayState::initial(problem.trim()),
            input,
            success_generation: 0,
            toast: ToastState::default(),
            in_flight: None,
            status: None,
            show_help: false,
            bell_pending: false,
            has_initialized: false,
            width: 80,
            height: 24,
        }
    }

    /// Replaces the random source used by the random retry policy.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Returns the input panel state.
    #[must_use]
    pub const fn input(&self) -> &InputPanelState {
        &self.input
    }

    /// Returns the displayed record state.
    #[must_use]
    pub const fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Returns the toast state.
    #[must_use]
    pub const fn toast(&self) -> &ToastState {
        &self.toast
    }

    /// Returns the outstanding request, if any.
    #[must_use]
    pub const fn in_flight(&self) -> Option<InFlight> {
        self.in_flight
    }

    /// Returns the status line, if any.
    #[must_use]
    pub const fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Returns the retry policy in force.
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        self.retry_policy
    }

    fn set_notice(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::Notice(text.into()));
    }

    fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::Error(text.into()));
    }
}
