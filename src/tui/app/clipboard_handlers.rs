//! Copy-to-clipboard handlers.
//!
//! The clipboard write runs on a blocking task. Success shows the toast in
//! the same update that receives the result and, when enabled, queues the
//! bell for the next frame. Failure is reported on the status line and
//! logged. Copies are never retried.

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use super::RewriteApp;
use crate::clipboard::ClipboardWriter;
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;

/// Status notice when there is nothing to copy.
pub(crate) const NOTHING_TO_COPY_NOTICE: &str = "Nothing to copy yet.";

impl RewriteApp {
    /// Copies the displayed rewrite to the clipboard.
    pub(super) fn handle_copy(&mut self) -> Option<Cmd> {
        let text = self
            .display
            .copy_text()
            .filter(|_| self.display.actions_visible())
            .map(str::to_owned);

        let Some(copied) = text else {
            self.set_notice(NOTHING_TO_COPY_NOTICE);
            return None;
        };

        Some(spawn_copy(Arc::clone(&self.clipboard), copied))
    }

    /// Shows the toast and arms its visibility timer.
    pub(super) fn handle_copy_succeeded(&mut self, chars: usize) -> Option<Cmd> {
        self.telemetry
            .record(TelemetryEvent::ClipboardCopied { chars });
        self.bell_pending = self.bell_on_copy;
        let generation = self.toast.show();
        Some(Self::arm_toast_visible_timer(generation))
    }

    /// Reports a clipboard failure.
    pub(super) fn handle_copy_failed(&mut self, message: &str) -> Option<Cmd> {
        tracing::error!(error = message, "failed to copy text to clipboard");
        self.set_error(format!("Failed to copy text to clipboard: {message}"));
        None
    }
}

fn spawn_copy(clipboard: Arc<dyn ClipboardWriter>, text: String) -> Cmd {
    Box::pin(async move {
        let chars = text.chars().count();
        let outcome = tokio::task::spawn_blocking(move || clipboard.copy_text(&text)).await;

        let msg = match outcome {
            Ok(Ok(())) => AppMsg::CopySucceeded { chars },
            Ok(Err(error)) => AppMsg::CopyFailed(error.to_string()),
            Err(error) => AppMsg::CopyFailed(format!("clipboard task failed: {error}")),
        };
        Some(Box::new(msg) as Box<dyn Any + Send>)
    })
}
