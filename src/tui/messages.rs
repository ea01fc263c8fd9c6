//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and timer expiries.

use crate::rewrite::RewriteResult;

use super::state::InFlight;

/// User-triggered actions with an entry in the routing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Rewrite the problem in the input panel.
    Submit,
    /// Rewrite the displayed problem in a different theme.
    Retry,
    /// Copy the displayed rewrite to the clipboard.
    Copy,
    /// Dismiss the success indicator and status line.
    Dismiss,
}

/// Messages for the rewrite TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Input editing
    /// Append a character to the problem text.
    InsertChar(char),
    /// Delete the last character of the problem text.
    DeleteBackward,
    /// Clear the problem text.
    ClearProblem,
    /// Select the next theme.
    NextTheme,
    /// Select the previous theme.
    PreviousTheme,
    /// Switch focus between the problem text and the action keys.
    ToggleFocus,

    // User actions
    /// Submit pressed.
    SubmitRequested,
    /// Retry pressed.
    RetryRequested,
    /// Copy pressed.
    CopyRequested,
    /// Escape pressed.
    EscapePressed,

    // Async results
    /// A rewrite or retry request finished.
    RewriteFinished {
        /// Which request finished.
        kind: InFlight,
        /// Record to display.
        result: RewriteResult,
        /// Time spent waiting for the provider.
        latency_ms: u64,
    },
    /// The clipboard accepted the text.
    CopySucceeded {
        /// Number of characters copied.
        chars: usize,
    },
    /// The clipboard rejected the text.
    CopyFailed(String),

    // Timers
    /// The success indicator timer for `generation` fired.
    SuccessIndicatorExpired {
        /// Generation the timer was armed for.
        generation: u64,
    },
    /// The toast visibility timer for `generation` fired.
    ToastHideStarted {
        /// Generation the timer was armed for.
        generation: u64,
    },
    /// The toast fade timer for `generation` fired.
    ToastHidden {
        /// Generation the timer was armed for.
        generation: u64,
    },

    // Application lifecycle
    /// Emitted once at startup to trigger the first render.
    Initialized,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns the routing-table event for user actions.
    #[must_use]
    pub const fn ui_event(&self) -> Option<UiEvent> {
        match self {
            Self::SubmitRequested => Some(UiEvent::Submit),
            Self::RetryRequested => Some(UiEvent::Retry),
            Self::CopyRequested => Some(UiEvent::Copy),
            Self::EscapePressed => Some(UiEvent::Dismiss),
            _ => None,
        }
    }

    /// Returns `true` for input panel editing messages.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(
            self,
            Self::InsertChar(_)
                | Self::DeleteBackward
                | Self::ClearProblem
                | Self::NextTheme
                | Self::PreviousTheme
                | Self::ToggleFocus
        )
    }

    /// Returns `true` for async completion messages.
    #[must_use]
    pub const fn is_completion(&self) -> bool {
        matches!(
            self,
            Self::RewriteFinished { .. } | Self::CopySucceeded { .. } | Self::CopyFailed(_)
        )
    }

    /// Returns `true` for timer expiry messages.
    #[must_use]
    pub const fn is_timer(&self) -> bool {
        matches!(
            self,
            Self::SuccessIndicatorExpired { .. }
                | Self::ToastHideStarted { .. }
                | Self::ToastHidden { .. }
        )
    }
}
