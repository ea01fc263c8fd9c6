//! Submit and rewrite completion handlers.
//!
//! A rewrite runs as a `Cmd` future; it is the only suspension point in the
//! flow. [`InFlight`] is set when the command is spawned and cleared when
//! [`AppMsg::RewriteFinished`] arrives.

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use super::RewriteApp;
use crate::rewrite::{
    ERROR_PREFIX, RewriteProvider, RewriteRequest, RewriteResult, fetch_rewritten_problem,
};
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;
use crate::tui::state::{DisplayState, InFlight};

impl RewriteApp {
    /// Validates the input panel and starts a rewrite.
    ///
    /// Ignored while another request is in flight.
    pub(super) fn handle_submit(&mut self) -> Option<Cmd> {
        if self.in_flight.is_some() {
            return None;
        }

        let (problem, theme) = match self.input.validate() {
            Ok(valid) => valid,
            Err(error) => {
                self.set_notice(error.to_string());
                return None;
            }
        };

        let request = RewriteRequest::new(problem, theme).with_num_examples(self.num_examples);
        Some(self.start_request(request, InFlight::Rewrite))
    }

    /// Marks `kind` as in flight and returns the command performing
    /// `request`.
    pub(super) fn start_request(&mut self, request: RewriteRequest, kind: InFlight) -> Cmd {
        self.in_flight = Some(kind);
        self.status = None;
        spawn_rewrite_request(Arc::clone(&self.provider), request, kind)
    }

    /// Displays a finished record and raises the success indicator.
    ///
    /// Error records are displayed like any other and also reported on the
    /// status line.
    pub(super) fn handle_rewrite_finished(
        &mut self,
        kind: InFlight,
        result: &RewriteResult,
        latency_ms: u64,
    ) -> Option<Cmd> {
        self.in_flight = None;
        self.telemetry.record(TelemetryEvent::RewriteCompleted {
            theme: result.theme.clone(),
            latency_ms,
            fallback: result.is_error(),
        });

        self.display = DisplayState::render(result);
        if kind == InFlight::Retry {
            self.input.select_theme(&result.theme);
        }

        if let Some(message) = result.rewritten_problem.strip_prefix(ERROR_PREFIX) {
            self.set_error(format!("Failed to rewrite problem: {message}"));
        }

        Some(self.raise_success_indicator())
    }
}

fn spawn_rewrite_request(
    provider: Arc<dyn RewriteProvider>,
    request: RewriteRequest,
    kind: InFlight,
) -> Cmd {
    Box::pin(async move {
        let started = tokio::time::Instant::now();
        let result = fetch_rewritten_problem(provider.as_ref(), &request).await;
        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        Some(Box::new(AppMsg::RewriteFinished {
            kind,
            result,
            latency_ms,
        }) as Box<dyn Any + Send>)
    })
}
