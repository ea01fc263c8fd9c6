//! Lifecycle and window handlers for the rewrite TUI.
//!
//! This module handles startup initialisation, terminal resize events,
//! dismissal, and high-level lifecycle messages such as quit and help
//! toggling.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::RewriteApp;
use crate::tui::messages::AppMsg;

impl RewriteApp {
    /// Dispatches lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Initialized => {
                self.has_initialized = true;
                None
            }
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                None
            }
            _ => {
                // Unreachable: caller filters to lifecycle messages.
                None
            }
        }
    }

    /// Hides the success indicator and clears the status line.
    pub(super) fn handle_dismiss(&mut self) -> Option<Cmd> {
        self.display.hide_success();
        self.status = None;
        None
    }

    /// Returns whether the startup message has been handled.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.has_initialized
    }

    /// Creates a command that emits `Initialized` immediately.
    ///
    /// This synthetic startup event triggers the first render cycle without
    /// waiting for user input.
    pub(super) fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }
}
