//! Scenario state for rewrite TUI behavioural tests.

use std::sync::Arc;

use bubbletea_rs::Cmd;
use reframe::clipboard::RecordingClipboard;
use reframe::tui::RewriteApp;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

use crate::support::runtime::SharedRuntime;

/// State shared across steps in a rewrite TUI scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct RewriteTuiState {
    /// The TUI application model under test.
    pub(crate) app: Slot<RewriteApp>,
    /// Paused-clock runtime executing commands.
    pub(crate) runtime: Slot<SharedRuntime>,
    /// Clipboard the app copies into.
    pub(crate) clipboard: Slot<Arc<RecordingClipboard>>,
    /// Most recent timer command not yet run.
    pub(crate) pending_timer: Slot<Option<Cmd>>,
    /// The rendered view output.
    pub(crate) rendered_view: Slot<String>,
}

/// Result type for BDD test steps.
pub(crate) type StepResult = Result<(), Box<dyn std::error::Error>>;

impl RewriteTuiState {
    /// Installs `app` with a fresh paused runtime.
    pub(crate) fn install(&self, app: RewriteApp, clipboard: Arc<RecordingClipboard>) -> StepResult {
        self.runtime.set(SharedRuntime::paused()?);
        self.app.set(app);
        self.clipboard.set(clipboard);
        self.pending_timer.set(None);
        Ok(())
    }

    pub(crate) fn runtime(&self) -> Result<SharedRuntime, Box<dyn std::error::Error>> {
        self.runtime
            .get()
            .ok_or_else(|| "runtime should be initialised before running commands".into())
    }

    /// Reads from the app.
    pub(crate) fn with_app<T>(
        &self,
        read: impl FnOnce(&RewriteApp) -> T,
    ) -> Result<T, Box<dyn std::error::Error>> {
        self.app
            .with_ref(read)
            .ok_or_else(|| "app should be initialised".into())
    }
}
