//! Problem editing and theme selection handlers.

use bubbletea_rs::Cmd;

use super::RewriteApp;
use crate::tui::messages::AppMsg;

impl RewriteApp {
    /// Dispatches input panel messages to their handlers.
    pub(super) fn handle_input_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::InsertChar(ch) => self.input.insert_char(*ch),
            AppMsg::DeleteBackward => self.input.delete_backward(),
            AppMsg::ClearProblem => self.input.clear_problem(),
            AppMsg::NextTheme => self.input.select_next_theme(),
            AppMsg::PreviousTheme => self.input.select_previous_theme(),
            AppMsg::ToggleFocus => self.input.toggle_focus(),
            _ => {
                // Unreachable: caller filters to input messages.
            }
        }
        None
    }
}
