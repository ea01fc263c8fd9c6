//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. Mapping depends on focus: while the
//! problem text has focus, printable keys edit it; while the action row has
//! focus, single letters trigger actions.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;
use super::state::Focus;

/// Maps a key event to an application message for the given focus.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg, focus: Focus) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return map_control_key(key.key);
    }

    map_shared_key(key.key).or_else(|| match focus {
        Focus::Problem => map_problem_key(key.key),
        Focus::Actions => map_action_key(key.key),
    })
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_control_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('c' | 'q') => Some(AppMsg::Quit),
        KeyCode::Char('r') => Some(AppMsg::RetryRequested),
        KeyCode::Char('y') => Some(AppMsg::CopyRequested),
        KeyCode::Char('u') => Some(AppMsg::ClearProblem),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_shared_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Enter => Some(AppMsg::SubmitRequested),
        KeyCode::Esc => Some(AppMsg::EscapePressed),
        KeyCode::Tab | KeyCode::BackTab => Some(AppMsg::ToggleFocus),
        KeyCode::Down => Some(AppMsg::NextTheme),
        KeyCode::Up => Some(AppMsg::PreviousTheme),
        KeyCode::F(1) => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_problem_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char(ch) => Some(AppMsg::InsertChar(ch)),
        KeyCode::Backspace => Some(AppMsg::DeleteBackward),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_action_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('r') => Some(AppMsg::RetryRequested),
        KeyCode::Char('y' | 'c') => Some(AppMsg::CopyRequested),
        KeyCode::Char('j') => Some(AppMsg::NextTheme),
        KeyCode::Char('k') => Some(AppMsg::PreviousTheme),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}
