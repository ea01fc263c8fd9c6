//! Success indicator and toast timers.
//!
//! Each timer carries the generation that was current when it was armed.
//! Expiry only changes state when that generation is still current, so an
//! explicit dismissal or a newer render always wins.

use std::any::Any;
use std::time::Duration;

use bubbletea_rs::Cmd;

use super::RewriteApp;
use crate::tui::messages::AppMsg;
use crate::tui::state::{SUCCESS_INDICATOR_DURATION, TOAST_FADE_DURATION, TOAST_VISIBLE_DURATION};

impl RewriteApp {
    /// Dispatches timer messages to their handlers.
    pub(super) fn handle_timer_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SuccessIndicatorExpired { generation } => {
                self.handle_success_expired(*generation)
            }
            AppMsg::ToastHideStarted { generation } => {
                if self.toast.begin_hide(*generation) {
                    return Some(Self::arm_toast_fade_timer(*generation));
                }
                None
            }
            AppMsg::ToastHidden { generation } => {
                self.toast.finish_hide(*generation);
                None
            }
            _ => {
                // Unreachable: caller filters to timer messages.
                None
            }
        }
    }

    /// Bumps the indicator generation and arms its expiry timer.
    pub(super) fn raise_success_indicator(&mut self) -> Cmd {
        self.success_generation = self.success_generation.wrapping_add(1);
        Self::arm_success_timer(self.success_generation)
    }

    fn handle_success_expired(&mut self, generation: u64) -> Option<Cmd> {
        if generation == self.success_generation && self.display.success_visible() {
            self.display.hide_success();
        }
        None
    }

    /// Creates a command that emits `SuccessIndicatorExpired` after
    /// [`SUCCESS_INDICATOR_DURATION`].
    pub(super) fn arm_success_timer(generation: u64) -> Cmd {
        delayed(
            SUCCESS_INDICATOR_DURATION,
            AppMsg::SuccessIndicatorExpired { generation },
        )
    }

    /// Creates a command that emits `ToastHideStarted` after
    /// [`TOAST_VISIBLE_DURATION`].
    pub(super) fn arm_toast_visible_timer(generation: u64) -> Cmd {
        delayed(
            TOAST_VISIBLE_DURATION,
            AppMsg::ToastHideStarted { generation },
        )
    }

    /// Creates a command that emits `ToastHidden` after
    /// [`TOAST_FADE_DURATION`].
    pub(super) fn arm_toast_fade_timer(generation: u64) -> Cmd {
        delayed(TOAST_FADE_DURATION, AppMsg::ToastHidden { generation })
    }
}

fn delayed(duration: Duration, msg: AppMsg) -> Cmd {
    Box::pin(async move {
        tokio::time::sleep(duration).await;
        Some(Box::new(msg) as Box<dyn Any + Send>)
    })
}
