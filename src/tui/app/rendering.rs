//! Rendering logic for the rewrite TUI application.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::{RewriteApp, StatusMessage};
use crate::tui::components::{
    InputPanelComponent, InputPanelViewContext, ResultPanelComponent, ResultPanelViewContext,
};
use crate::tui::state::{COPIED_MESSAGE, Focus, ToastPhase};

impl RewriteApp {
    /// Renders the main screen: header, input panel, result panel, toast,
    /// and status bar.
    pub(super) fn render_main_view(&self) -> String {
        let width = usize::from(self.width).max(1);
        let mut output = String::new();

        output.push_str(&self.render_header());
        output.push('\n');

        let input_view = InputPanelComponent::view(&InputPanelViewContext {
            state: &self.input,
            in_flight: self.in_flight,
            max_width: width,
        });
        output.push_str(&input_view);

        let toast = self.render_toast();
        let used_height = output
            .lines()
            .count()
            .saturating_add(toast.lines().count())
            .saturating_add(1);
        let result_height = usize::from(self.height).saturating_sub(used_height).max(1);

        output.push_str(&ResultPanelComponent::view(&ResultPanelViewContext {
            display: &self.display,
            in_flight: self.in_flight,
            max_width: width,
            max_height: result_height,
        }));
        output.push_str(&toast);
        output.push_str(&self.render_status_bar());

        output
    }

    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "Reframe - Math Problem Rewriter";
        let source = self.provider.describe();
        let busy = self
            .in_flight
            .map(|kind| format!(" [{}]", kind.label()))
            .unwrap_or_default();
        format!("{title} ({source}){busy}\n")
    }

    /// Renders the copy toast for its current phase.
    pub(super) fn render_toast(&self) -> String {
        match self.toast.phase() {
            ToastPhase::Hidden => String::new(),
            ToastPhase::Visible => format!("[ {COPIED_MESSAGE} ]\n"),
            ToastPhase::Hiding => format!("  {COPIED_MESSAGE}\n"),
        }
    }

    /// Renders the status bar with the status line or help hints.
    pub(super) fn render_status_bar(&self) -> String {
        match &self.status {
            Some(StatusMessage::Error(text)) => return format!("Error: {text}\n"),
            Some(StatusMessage::Notice(text)) => return format!("{text}\n"),
            None => {}
        }

        let hints = match self.input.focus() {
            Focus::Problem => "Enter:rewrite  Up/Down:theme  Tab:actions  ^R:retry  ^Y:copy  ^C:quit",
            Focus::Actions => "Enter:rewrite  j/k:theme  r:retry  y:copy  Tab:edit  ?:help  q:quit",
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay() -> String {
        let help_text = r"
=== Keyboard Shortcuts ===

Anywhere:
  Enter        Rewrite the problem in the selected theme
  Up, Down     Change theme
  Tab          Switch between editing and action keys
  Esc          Dismiss messages
  Ctrl+R       Try a different theme
  Ctrl+Y       Copy the rewritten problem
  Ctrl+U       Clear the problem text
  F1           Toggle this help
  Ctrl+C       Quit

Editing:
  text keys    Edit the problem
  Backspace    Delete one character

Action keys:
  r            Try a different theme
  y, c         Copy the rewritten problem
  j, k         Change theme
  ?            Toggle this help
  q            Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}
