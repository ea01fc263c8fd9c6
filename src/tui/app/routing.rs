//! Message routing and dispatch logic.
//!
//! User actions go through an explicit table from [`UiEvent`] to handler
//! function. Everything else is dispatched by message category.

use bubbletea_rs::Cmd;

use super::RewriteApp;
use crate::tui::messages::{AppMsg, UiEvent};

/// Handler invoked for a [`UiEvent`].
pub type UiHandler = fn(&mut RewriteApp) -> Option<Cmd>;

/// Event-to-handler map for user actions.
pub const HANDLER_TABLE: [(UiEvent, UiHandler); 4] = [
    (UiEvent::Submit, RewriteApp::handle_submit),
    (UiEvent::Retry, RewriteApp::handle_retry),
    (UiEvent::Copy, RewriteApp::handle_copy),
    (UiEvent::Dismiss, RewriteApp::handle_dismiss),
];

/// Looks up the handler for `event`.
#[must_use]
pub fn handler_for(event: UiEvent) -> Option<UiHandler> {
    HANDLER_TABLE
        .iter()
        .find(|(candidate, _)| *candidate == event)
        .map(|(_, handler)| *handler)
}

impl RewriteApp {
    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if let Some(event) = msg.ui_event() {
            return handler_for(event).and_then(|handler| handler(self));
        }
        if msg.is_input() {
            return self.handle_input_msg(msg);
        }
        if msg.is_completion() {
            return self.handle_completion_msg(msg);
        }
        if msg.is_timer() {
            return self.handle_timer_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches async completion messages to their handlers.
    fn handle_completion_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::RewriteFinished {
                kind,
                result,
                latency_ms,
            } => self.handle_rewrite_finished(*kind, result, *latency_ms),
            AppMsg::CopySucceeded { chars } => self.handle_copy_succeeded(*chars),
            AppMsg::CopyFailed(message) => self.handle_copy_failed(message),
            _ => {
                // Unreachable: caller filters to completion messages.
                None
            }
        }
    }
}
