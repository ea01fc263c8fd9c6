//! When steps for rewrite TUI scenarios.

use bubbletea_rs::Model;
use reframe::tui::RewriteApp;
use reframe::tui::messages::AppMsg;
use rstest_bdd_macros::when;

use crate::rewrite_tui_bdd_state::{RewriteTuiState, StepResult};
use crate::support::{resolve, step};

/// Sends `msg`, applies its result, and keeps any follow-up timer.
fn send(rewrite_tui_state: &RewriteTuiState, msg: &AppMsg) -> StepResult {
    let runtime = rewrite_tui_state.runtime()?;
    let timer = rewrite_tui_state
        .app
        .with_mut(|app| step(&runtime, app, msg))
        .ok_or("app should be initialised before sending messages")?;
    rewrite_tui_state.pending_timer.set(timer);
    Ok(())
}

/// Runs the pending timer and applies the message it emits.
fn elapse_pending_timer(rewrite_tui_state: &RewriteTuiState) -> StepResult {
    let runtime = rewrite_tui_state.runtime()?;
    let timer = rewrite_tui_state
        .pending_timer
        .with_mut(Option::take)
        .ok_or("pending timer slot should be initialised")?
        .ok_or("expected a pending timer")?;
    let fired = resolve(&runtime, timer).ok_or("timer should emit a message")?;
    let next = rewrite_tui_state
        .app
        .with_mut(|app| app.handle_message(&fired))
        .ok_or("app should be initialised before applying timers")?;
    rewrite_tui_state.pending_timer.set(next);
    Ok(())
}

#[when("the user submits the problem")]
fn when_user_submits(rewrite_tui_state: &RewriteTuiState) -> StepResult {
    send(rewrite_tui_state, &AppMsg::SubmitRequested)
}

#[when("the user retries with a different theme")]
fn when_user_retries(rewrite_tui_state: &RewriteTuiState) -> StepResult {
    send(rewrite_tui_state, &AppMsg::RetryRequested)
}

#[when("the user copies the rewrite")]
fn when_user_copies(rewrite_tui_state: &RewriteTuiState) -> StepResult {
    send(rewrite_tui_state, &AppMsg::CopyRequested)
}

#[when("the success indicator timer elapses")]
fn when_success_timer_elapses(rewrite_tui_state: &RewriteTuiState) -> StepResult {
    elapse_pending_timer(rewrite_tui_state)
}

#[when("the toast visibility timer elapses")]
fn when_toast_visibility_elapses(rewrite_tui_state: &RewriteTuiState) -> StepResult {
    elapse_pending_timer(rewrite_tui_state)
}

#[when("the toast fade timer elapses")]
fn when_toast_fade_elapses(rewrite_tui_state: &RewriteTuiState) -> StepResult {
    elapse_pending_timer(rewrite_tui_state)
}

#[when("the view is rendered")]
fn when_view_is_rendered(rewrite_tui_state: &RewriteTuiState) -> StepResult {
    let view = rewrite_tui_state.with_app(RewriteApp::view)?;
    rewrite_tui_state.rendered_view.set(view);
    Ok(())
}
