//! Then steps for rewrite TUI scenarios.

use reframe::tui::state::ToastPhase;
use rstest_bdd_macros::then;

use crate::rewrite_tui_bdd_state::{RewriteTuiState, StepResult};

fn expect_eq(what: &str, actual: &str, expected: &str) -> StepResult {
    if actual == expected {
        return Ok(());
    }
    Err(format!("expected {what} to be '{expected}', got '{actual}'").into())
}

#[then("the displayed original problem is {text}")]
fn then_original_is(rewrite_tui_state: &RewriteTuiState, text: String) -> StepResult {
    let actual = rewrite_tui_state.with_app(|app| app.display().original_problem().to_owned())?;
    expect_eq("original problem", &actual, text.trim_matches('"'))
}

#[then("the displayed theme is {text}")]
fn then_theme_is(rewrite_tui_state: &RewriteTuiState, text: String) -> StepResult {
    let actual = rewrite_tui_state.with_app(|app| app.display().theme().to_owned())?;
    expect_eq("displayed theme", &actual, text.trim_matches('"'))
}

#[then("the selected theme is {text}")]
fn then_selected_theme_is(rewrite_tui_state: &RewriteTuiState, text: String) -> StepResult {
    let actual = rewrite_tui_state
        .with_app(|app| app.input().selected_theme().map(ToOwned::to_owned))?
        .ok_or("expected a selected theme")?;
    expect_eq("selected theme", &actual, text.trim_matches('"'))
}

#[then("the displayed rewrite starts with {text}")]
fn then_rewrite_starts_with(rewrite_tui_state: &RewriteTuiState, text: String) -> StepResult {
    let expected = text.trim_matches('"');
    let actual = rewrite_tui_state.with_app(|app| app.display().rewritten_problem().to_owned())?;
    if actual.starts_with(expected) {
        return Ok(());
    }
    Err(format!("expected rewrite to start with '{expected}', got '{actual}'").into())
}

#[then("the view contains {text}")]
fn then_view_contains(rewrite_tui_state: &RewriteTuiState, text: String) -> StepResult {
    let expected = text.trim_matches('"');
    let view = rewrite_tui_state
        .rendered_view
        .with_ref(Clone::clone)
        .ok_or("view should be rendered before assertions")?;
    if view.contains(expected) {
        return Ok(());
    }
    Err(format!("expected view to contain '{expected}', got:\n{view}").into())
}

#[then("the status line contains {text}")]
fn then_status_contains(rewrite_tui_state: &RewriteTuiState, text: String) -> StepResult {
    let expected = text.trim_matches('"');
    let status = rewrite_tui_state
        .with_app(|app| app.status().map(|status| status.text().to_owned()))?
        .ok_or("expected a status message")?;
    if status.contains(expected) {
        return Ok(());
    }
    Err(format!("expected status to contain '{expected}', got '{status}'").into())
}

#[then("no request is in flight")]
fn then_nothing_in_flight(rewrite_tui_state: &RewriteTuiState) -> StepResult {
    if rewrite_tui_state.with_app(|app| app.in_flight().is_none())? {
        return Ok(());
    }
    Err("expected no request in flight".into())
}

#[then("the action region is visible")]
fn then_actions_visible(rewrite_tui_state: &RewriteTuiState) -> StepResult {
    if rewrite_tui_state.with_app(|app| app.display().actions_visible())? {
        return Ok(());
    }
    Err("expected the action region to be visible".into())
}

#[then("the success indicator is visible")]
fn then_success_visible(rewrite_tui_state: &RewriteTuiState) -> StepResult {
    if rewrite_tui_state.with_app(|app| app.display().success_visible())? {
        return Ok(());
    }
    Err("expected the success indicator to be visible".into())
}

#[then("the success indicator is hidden")]
fn then_success_hidden(rewrite_tui_state: &RewriteTuiState) -> StepResult {
    if rewrite_tui_state.with_app(|app| app.display().success_visible())? {
        return Err("expected the success indicator to be hidden".into());
    }
    Ok(())
}

#[then("the toast is {phase}")]
fn then_toast_is(rewrite_tui_state: &RewriteTuiState, phase: String) -> StepResult {
    let expected = match phase.trim_matches('"') {
        "visible" => ToastPhase::Visible,
        "hiding" => ToastPhase::Hiding,
        "hidden" => ToastPhase::Hidden,
        other => return Err(format!("unknown toast phase '{other}'").into()),
    };
    let actual = rewrite_tui_state.with_app(|app| app.toast().phase())?;
    if actual == expected {
        return Ok(());
    }
    Err(format!("expected toast {expected:?}, got {actual:?}").into())
}

#[then("the clipboard holds the displayed rewrite")]
fn then_clipboard_holds_rewrite(rewrite_tui_state: &RewriteTuiState) -> StepResult {
    let displayed = rewrite_tui_state.with_app(|app| app.display().rewritten_problem().to_owned())?;
    let copies = rewrite_tui_state
        .clipboard
        .with_ref(|clipboard| clipboard.copies())
        .ok_or("clipboard should be initialised")?;
    if copies.last().map(String::as_str) == Some(displayed.trim()) {
        return Ok(());
    }
    Err(format!("expected clipboard to hold '{displayed}', got {copies:?}").into())
}
