//! Given steps for rewrite TUI scenarios.

use std::sync::Arc;

use reframe::RewriteError;
use reframe::clipboard::{ClipboardError, RecordingClipboard};
use reframe::rewrite::test_support::StubRewriteProvider;
use rstest_bdd_macros::given;

use crate::rewrite_tui_bdd_state::{RewriteTuiState, StepResult};
use crate::support::{app_with_provider, fixture_app, select_theme, type_problem};

#[given("a rewrite TUI over the simulated fixture table")]
fn given_fixture_tui(rewrite_tui_state: &RewriteTuiState) -> StepResult {
    let clipboard = Arc::new(RecordingClipboard::default());
    let app = fixture_app(Arc::clone(&clipboard) as Arc<dyn reframe::clipboard::ClipboardWriter>);
    rewrite_tui_state.install(app, clipboard)
}

#[given("a rewrite TUI whose service is unavailable")]
fn given_unavailable_service(rewrite_tui_state: &RewriteTuiState) -> StepResult {
    let clipboard = Arc::new(RecordingClipboard::default());
    let app = app_with_provider(
        Arc::new(StubRewriteProvider::failure(RewriteError::health_status(503))),
        Arc::clone(&clipboard) as Arc<dyn reframe::clipboard::ClipboardWriter>,
    );
    rewrite_tui_state.install(app, clipboard)
}

#[given("a rewrite TUI whose clipboard is unavailable")]
fn given_unavailable_clipboard(rewrite_tui_state: &RewriteTuiState) -> StepResult {
    let clipboard = Arc::new(RecordingClipboard::failing(ClipboardError::Unavailable {
        tried: "pbcopy, xclip".to_owned(),
    }));
    let app = fixture_app(Arc::clone(&clipboard) as Arc<dyn reframe::clipboard::ClipboardWriter>);
    rewrite_tui_state.install(app, clipboard)
}

#[given("the problem {problem} in theme {theme}")]
fn given_problem_and_theme(
    rewrite_tui_state: &RewriteTuiState,
    problem: String,
    theme: String,
) -> StepResult {
    let problem_text = problem.trim_matches('"');
    let theme_label = theme.trim_matches('"');
    rewrite_tui_state
        .app
        .with_mut(|app| {
            type_problem(app, problem_text);
            select_theme(app, theme_label)
        })
        .ok_or("app should be initialised before typing")??;
    Ok(())
}

#[given("the problem {problem} with no theme selected")]
fn given_problem_without_theme(rewrite_tui_state: &RewriteTuiState, problem: String) -> StepResult {
    let problem_text = problem.trim_matches('"');
    rewrite_tui_state
        .app
        .with_mut(|app| type_problem(app, problem_text))
        .ok_or("app should be initialised before typing")?;
    Ok(())
}
