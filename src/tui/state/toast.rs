//! Copy-confirmation toast lifecycle.
//!
//! `Hidden → Visible` on a successful copy, `Visible → Hiding` after
//! [`TOAST_VISIBLE_DURATION`], `Hiding → Hidden` after
//! [`TOAST_FADE_DURATION`]. Every transition carries the generation issued
//! by [`ToastState::show`], so timers armed for an earlier toast are
//! ignored.

use std::time::Duration;

/// Message shown after a successful copy.
pub const COPIED_MESSAGE: &str = "Copied to clipboard!";

/// How long the toast stays fully visible.
pub const TOAST_VISIBLE_DURATION: Duration = Duration::from_secs(3);

/// How long the toast spends fading out.
pub const TOAST_FADE_DURATION: Duration = Duration::from_millis(500);

/// Toast visibility phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPhase {
    /// Not shown.
    #[default]
    Hidden,
    /// Fully shown.
    Visible,
    /// Fading out.
    Hiding,
}

/// Toast phase plus the generation guarding its timers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastState {
    phase: ToastPhase,
    generation: u64,
}

impl ToastState {
    /// Shows the toast and returns the generation its timers must carry.
    pub const fn show(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.phase = ToastPhase::Visible;
        self.generation
    }

    /// Starts fading if `generation` is current and the toast is visible.
    ///
    /// Returns whether the transition happened.
    pub fn begin_hide(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != ToastPhase::Visible {
            return false;
        }
        self.phase = ToastPhase::Hiding;
        true
    }

    /// Hides the toast if `generation` is current and it is fading.
    ///
    /// Returns whether the transition happened.
    pub fn finish_hide(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != ToastPhase::Hiding {
            return false;
        }
        self.phase = ToastPhase::Hidden;
        true
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// Generation of the most recent [`Self::show`].
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}
