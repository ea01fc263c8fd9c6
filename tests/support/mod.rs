//! Shared test utilities for driving the rewrite TUI.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use bubbletea_rs::Cmd;
use reframe::clipboard::ClipboardWriter;
use reframe::rewrite::{FixtureRewriteProvider, RetryPolicy, RewriteProvider};
use reframe::tui::messages::AppMsg;
use reframe::tui::{AppSettings, RewriteApp};

pub mod runtime;

use runtime::SharedRuntime;

/// Builds an app over the default fixture table with no latency.
pub fn fixture_app(clipboard: Arc<dyn ClipboardWriter>) -> RewriteApp {
    let provider: Arc<dyn RewriteProvider> =
        Arc::new(FixtureRewriteProvider::with_default_table().with_latency(Duration::ZERO));
    app_with_provider(provider, clipboard)
}

/// Builds an app over `provider` with the cyclic retry policy and no bell.
pub fn app_with_provider(
    provider: Arc<dyn RewriteProvider>,
    clipboard: Arc<dyn ClipboardWriter>,
) -> RewriteApp {
    RewriteApp::new(AppSettings {
        provider,
        clipboard,
        retry_policy: RetryPolicy::Cyclic,
        bell_on_copy: false,
        ..AppSettings::default()
    })
}

/// Replaces the problem text by typing `text`.
pub fn type_problem(app: &mut RewriteApp, text: &str) {
    app.handle_message(&AppMsg::ClearProblem);
    for ch in text.chars() {
        app.handle_message(&AppMsg::InsertChar(ch));
    }
}

/// Moves the theme selector until `theme` is selected.
///
/// # Errors
///
/// Returns an error when `theme` is not in the catalogue.
pub fn select_theme(app: &mut RewriteApp, theme: &str) -> Result<(), io::Error> {
    for _ in 0..app.input().themes().len() {
        app.handle_message(&AppMsg::NextTheme);
        if app.input().selected_theme() == Some(theme) {
            return Ok(());
        }
    }
    Err(io::Error::other(format!("theme {theme} is not in the catalogue")))
}

/// Sends `msg` and applies only the first resulting message.
///
/// Returns the follow-up command, such as a timer, without running it.
pub fn step(runtime: &SharedRuntime, app: &mut RewriteApp, msg: &AppMsg) -> Option<Cmd> {
    let cmd = app.handle_message(msg)?;
    let next = resolve(runtime, cmd)?;
    app.handle_message(&next)
}

/// Runs `cmd` and downcasts its message.
pub fn resolve(runtime: &SharedRuntime, cmd: Cmd) -> Option<AppMsg> {
    runtime
        .block_on(cmd)?
        .downcast::<AppMsg>()
        .ok()
        .map(|msg| *msg)
}
