//! Displayed result record and the success indicator.

use std::time::Duration;

use crate::rewrite::RewriteResult;

/// How long the success indicator stays up after a render.
pub const SUCCESS_INDICATOR_DURATION: Duration = Duration::from_secs(3);

/// What the result panel shows.
///
/// Built wholesale from a [`RewriteResult`] by [`DisplayState::render`];
/// never patched field by field, except for the "no other themes"
/// placeholder and the success indicator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayState {
    original_problem: String,
    rewritten_problem: String,
    theme: String,
    examples: Vec<String>,
    notes: Vec<String>,
    results_visible: bool,
    actions_visible: bool,
    success_visible: bool,
}

impl DisplayState {
    /// Startup state: the prefilled problem is shown with an empty rewrite
    /// and the action region hidden.
    #[must_use]
    pub fn initial(original_problem: &str) -> Self {
        Self {
            actions_visible: false,
            success_visible: false,
            ..Self::render(&RewriteResult::pending(original_problem))
        }
    }

    /// Produces the state showing `record`, with both regions visible and
    /// the success indicator raised.
    ///
    /// Rendering the same record twice yields the same state.
    #[must_use]
    pub fn render(record: &RewriteResult) -> Self {
        Self {
            original_problem: record.original_problem.clone(),
            rewritten_problem: record.rewritten_problem.clone(),
            theme: record.theme.clone(),
            examples: record.examples_used.clone(),
            notes: record.notes.clone(),
            results_visible: true,
            actions_visible: true,
            success_visible: true,
        }
    }

    /// Replaces the rewrite with the "no other themes" placeholder.
    ///
    /// The original problem stays as it was.
    pub fn show_no_other_themes(&mut self) {
        let placeholder = RewriteResult::no_other_themes(self.original_problem.as_str());
        self.rewritten_problem = placeholder.rewritten_problem;
        self.theme = placeholder.theme;
        self.examples = placeholder.examples_used;
        self.notes = placeholder.notes;
    }

    /// Hides the success indicator.
    pub const fn hide_success(&mut self) {
        self.success_visible = false;
    }

    /// Original problem text.
    #[must_use]
    pub const fn original_problem(&self) -> &str {
        self.original_problem.as_str()
    }

    /// Rewritten text, error message, or placeholder.
    #[must_use]
    pub const fn rewritten_problem(&self) -> &str {
        self.rewritten_problem.as_str()
    }

    /// Theme label of the displayed record.
    #[must_use]
    pub const fn theme(&self) -> &str {
        self.theme.as_str()
    }

    /// Examples the service drew on.
    #[must_use]
    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    /// Extra notes such as category and difficulty.
    #[must_use]
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Whether the results region is shown.
    #[must_use]
    pub const fn results_visible(&self) -> bool {
        self.results_visible
    }

    /// Whether the retry and copy controls are shown.
    #[must_use]
    pub const fn actions_visible(&self) -> bool {
        self.actions_visible
    }

    /// Whether the success indicator is shown.
    #[must_use]
    pub const fn success_visible(&self) -> bool {
        self.success_visible
    }

    /// Text the copy action places on the clipboard, if any.
    #[must_use]
    pub fn copy_text(&self) -> Option<&str> {
        let text = self.rewritten_problem.trim();
        (!text.is_empty()).then_some(text)
    }
}
