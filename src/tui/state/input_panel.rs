//! Problem input and theme selector state.

use thiserror::Error;

/// Problem shown in the input when the app starts.
pub const INITIAL_PROBLEM: &str =
    "Sarah has 24 apples. She gives 8 apples to her friend. How many apples does she have left?";

/// Reasons a submission is rejected before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The problem text is blank.
    #[error("Please enter a math problem.")]
    MissingProblem,
    /// No theme is selected.
    #[error("Please select a theme.")]
    MissingTheme,
}

/// Which part of the screen receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Characters edit the problem text.
    #[default]
    Problem,
    /// Single keys trigger actions.
    Actions,
}

impl Focus {
    /// Returns the other focus target.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Problem => Self::Actions,
            Self::Actions => Self::Problem,
        }
    }
}

/// Editable problem text plus the theme selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPanelState {
    problem: String,
    themes: Vec<String>,
    selected: Option<usize>,
    focus: Focus,
}

impl InputPanelState {
    /// Creates an empty input over the `themes` catalogue with nothing
    /// selected.
    #[must_use]
    pub const fn new(themes: Vec<String>) -> Self {
        Self {
            problem: String::new(),
            themes,
            selected: None,
            focus: Focus::Problem,
        }
    }

    /// Prefills the problem text.
    #[must_use]
    pub fn with_problem(mut self, problem: impl Into<String>) -> Self {
        self.problem = problem.into();
        self
    }

    /// Preselects `theme` when it is in the catalogue.
    #[must_use]
    pub fn with_theme(mut self, theme: &str) -> Self {
        self.selected = self.position_of(theme);
        self
    }

    /// Current problem text.
    #[must_use]
    pub const fn problem(&self) -> &str {
        self.problem.as_str()
    }

    /// Theme catalogue in selector order.
    #[must_use]
    pub fn themes(&self) -> &[String] {
        &self.themes
    }

    /// Index of the selected theme, if any.
    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Selected theme label, if any.
    #[must_use]
    pub fn selected_theme(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.themes.get(index))
            .map(String::as_str)
    }

    /// Current focus target.
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// Moves focus to the other target.
    pub const fn toggle_focus(&mut self) {
        self.focus = self.focus.toggled();
    }

    /// Appends a character to the problem text.
    pub fn insert_char(&mut self, ch: char) {
        self.problem.push(ch);
    }

    /// Removes the last character of the problem text.
    pub fn delete_backward(&mut self) {
        self.problem.pop();
    }

    /// Clears the problem text.
    pub fn clear_problem(&mut self) {
        self.problem.clear();
    }

    /// Selects the next theme, wrapping, or the first when none is selected.
    pub fn select_next_theme(&mut self) {
        let count = self.themes.len();
        if count == 0 {
            return;
        }
        self.selected = Some(
            self.selected
                .map_or(0, |index| index.saturating_add(1).checked_rem(count).unwrap_or(0)),
        );
    }

    /// Selects the previous theme, wrapping, or the last when none is
    /// selected.
    pub fn select_previous_theme(&mut self) {
        let count = self.themes.len();
        if count == 0 {
            return;
        }
        let last = count.saturating_sub(1);
        self.selected = Some(match self.selected {
            Some(0) | None => last,
            Some(index) => index.saturating_sub(1),
        });
    }

    /// Moves the selector to `theme`, appending it to the catalogue when the
    /// provider chose a theme the catalogue does not list.
    pub fn select_theme(&mut self, theme: &str) {
        if let Some(index) = self.position_of(theme) {
            self.selected = Some(index);
            return;
        }
        self.themes.push(theme.to_owned());
        self.selected = Some(self.themes.len().saturating_sub(1));
    }

    /// Returns the trimmed problem and the selected theme.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when the problem is blank or no theme is
    /// selected.
    pub fn validate(&self) -> Result<(String, String), InputError> {
        let problem = self.problem.trim();
        if problem.is_empty() {
            return Err(InputError::MissingProblem);
        }
        let theme = self.selected_theme().ok_or(InputError::MissingTheme)?;
        Ok((problem.to_owned(), theme.to_owned()))
    }

    fn position_of(&self, theme: &str) -> Option<usize> {
        self.themes.iter().position(|known| known == theme)
    }
}
