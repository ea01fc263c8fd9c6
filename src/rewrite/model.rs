//! Domain models for problem rewriting.

use serde::{Deserialize, Serialize};

/// Number of examples requested from the service when the caller does not
/// choose one.
pub const DEFAULT_NUM_EXAMPLES: u32 = 3;

/// Prefix carried by `rewritten_problem` when the request failed.
pub const ERROR_PREFIX: &str = "Error: ";

/// Placeholder used when a successful response omits the rewritten text.
pub const MISSING_REWRITE_PLACEHOLDER: &str = "No rewritten problem returned";

/// Placeholder used by the simulated provider when nothing matches.
pub const NO_REWRITE_AVAILABLE: &str = "No rewrite available for this problem.";

/// Placeholder shown when retry has no other theme to offer.
pub const NO_OTHER_THEMES_TEXT: &str = "No other themes available for this problem.";

/// Theme label shown alongside [`NO_OTHER_THEMES_TEXT`].
pub const NO_THEME_LABEL: &str = "N/A";

/// Input payload for a rewrite request.
///
/// Serialises to the `POST /rewrite` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewriteRequest {
    original_problem: String,
    theme: String,
    num_examples: u32,
}

impl RewriteRequest {
    /// Creates a request using [`DEFAULT_NUM_EXAMPLES`].
    #[must_use]
    pub fn new(original_problem: impl Into<String>, theme: impl Into<String>) -> Self {
        Self {
            original_problem: original_problem.into(),
            theme: theme.into(),
            num_examples: DEFAULT_NUM_EXAMPLES,
        }
    }

    /// Overrides the number of examples requested.
    #[must_use]
    pub const fn with_num_examples(mut self, num_examples: u32) -> Self {
        self.num_examples = num_examples;
        self
    }

    /// Problem text to rewrite.
    #[must_use]
    pub const fn original_problem(&self) -> &str {
        self.original_problem.as_str()
    }

    /// Requested theme label.
    #[must_use]
    pub const fn theme(&self) -> &str {
        self.theme.as_str()
    }

    /// Number of examples the service should draw on.
    #[must_use]
    pub const fn num_examples(&self) -> u32 {
        self.num_examples
    }
}

/// Provider answer before it is folded into a [`RewriteResult`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RewriteResponse {
    /// Rewritten problem text.
    pub rewritten_problem: String,
    /// Examples the provider says it drew on.
    pub examples_used: Vec<String>,
    /// Optional metadata such as category or difficulty.
    pub notes: Vec<String>,
}

impl RewriteResponse {
    /// Creates a response carrying only rewritten text.
    #[must_use]
    pub fn text(rewritten_problem: impl Into<String>) -> Self {
        Self {
            rewritten_problem: rewritten_problem.into(),
            ..Self::default()
        }
    }
}

/// The result record displayed to the user.
///
/// `original_problem` and `theme` always echo the request that produced the
/// record, including error records.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RewriteResult {
    /// Problem text as submitted.
    pub original_problem: String,
    /// Rewritten text, an `Error: ` message, or a placeholder.
    pub rewritten_problem: String,
    /// Theme label that was requested.
    pub theme: String,
    /// Examples the provider drew on, in provider order.
    #[serde(default)]
    pub examples_used: Vec<String>,
    /// Extra provider metadata lines.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl RewriteResult {
    /// Builds a record from a request and the provider's answer.
    #[must_use]
    pub fn from_response(request: &RewriteRequest, response: RewriteResponse) -> Self {
        Self {
            original_problem: request.original_problem().to_owned(),
            rewritten_problem: response.rewritten_problem,
            theme: request.theme().to_owned(),
            examples_used: response.examples_used,
            notes: response.notes,
        }
    }

    /// Builds an error record for a failed request.
    #[must_use]
    pub fn error(request: &RewriteRequest, message: impl std::fmt::Display) -> Self {
        Self {
            original_problem: request.original_problem().to_owned(),
            rewritten_problem: format!("{ERROR_PREFIX}{message}"),
            theme: request.theme().to_owned(),
            examples_used: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Builds the empty record shown before any rewrite has run.
    #[must_use]
    pub fn pending(original_problem: impl Into<String>) -> Self {
        Self {
            original_problem: original_problem.into(),
            ..Self::default()
        }
    }

    /// Builds the record shown when retry found no alternative theme.
    #[must_use]
    pub fn no_other_themes(original_problem: impl Into<String>) -> Self {
        Self {
            original_problem: original_problem.into(),
            rewritten_problem: NO_OTHER_THEMES_TEXT.to_owned(),
            theme: NO_THEME_LABEL.to_owned(),
            examples_used: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Returns `true` when the record carries an error message.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.rewritten_problem.starts_with(ERROR_PREFIX)
    }
}
