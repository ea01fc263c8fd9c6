//! In-memory rewrite provider that simulates the remote service.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::RewriteError;

use super::model::{NO_REWRITE_AVAILABLE, RewriteRequest, RewriteResponse};
use super::service::RewriteProvider;

/// Default artificial latency applied before answering.
pub const DEFAULT_SIMULATED_LATENCY: Duration = Duration::from_millis(800);

/// One canned rewrite in the fixture table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureEntry {
    /// Problem text the entry answers.
    pub original_problem: String,
    /// Theme label the entry answers.
    pub theme: String,
    /// Canned rewritten text.
    pub rewritten_problem: String,
    /// Arithmetic category, such as `addition`.
    pub category: Option<String>,
    /// Difficulty label, such as `easy`.
    pub difficulty: Option<String>,
}

impl FixtureEntry {
    /// Creates an entry without metadata.
    #[must_use]
    pub fn new(
        original_problem: impl Into<String>,
        theme: impl Into<String>,
        rewritten_problem: impl Into<String>,
    ) -> Self {
        Self {
            original_problem: original_problem.into(),
            theme: theme.into(),
            rewritten_problem: rewritten_problem.into(),
            category: None,
            difficulty: None,
        }
    }

    /// Attaches category and difficulty metadata.
    #[must_use]
    pub fn with_metadata(mut self, category: &str, difficulty: &str) -> Self {
        self.category = Some(category.to_owned());
        self.difficulty = Some(difficulty.to_owned());
        self
    }

    fn notes(&self) -> Vec<String> {
        let category = self
            .category
            .as_deref()
            .map(|value| format!("Category: {value}"));
        let difficulty = self
            .difficulty
            .as_deref()
            .map(|value| format!("Difficulty: {value}"));
        category.into_iter().chain(difficulty).collect()
    }
}

/// Built-in table used by the simulated provider.
#[must_use]
pub fn default_fixture_table() -> Vec<FixtureEntry> {
    vec![
        FixtureEntry::new(
            "10 + 10",
            "Football",
            "The home team scored 10 points in the first half and another 10 points in the \
             second half. How many points did they score in the whole game?",
        )
        .with_metadata("addition", "easy"),
        FixtureEntry::new(
            "10 + 10",
            "Minecraft",
            "Steve mined 10 diamonds on Monday and 10 more on Tuesday. How many diamonds does \
             he have now?",
        )
        .with_metadata("addition", "easy"),
        FixtureEntry::new(
            "10 + 10",
            "Movies",
            "A cinema sold 10 tickets for the matinee and 10 tickets for the evening show. How \
             many tickets did it sell in total?",
        )
        .with_metadata("addition", "easy"),
        FixtureEntry::new(
            "5 * 3",
            "Soccer",
            "A soccer team scored 5 goals per game. If they played 3 games, how many goals did \
             they score in total?",
        )
        .with_metadata("multiplication", "easy"),
        FixtureEntry::new(
            "15 - 7",
            "Basketball",
            "A basketball player made 15 shots but missed 7. How many shots were successful?",
        )
        .with_metadata("subtraction", "easy"),
    ]
}

/// Rewrite provider answering from an injected in-memory table.
#[derive(Debug, Clone)]
pub struct FixtureRewriteProvider {
    entries: Vec<FixtureEntry>,
    latency: Duration,
}

impl FixtureRewriteProvider {
    /// Creates a provider over `entries` using [`DEFAULT_SIMULATED_LATENCY`].
    #[must_use]
    pub const fn new(entries: Vec<FixtureEntry>) -> Self {
        Self {
            entries,
            latency: DEFAULT_SIMULATED_LATENCY,
        }
    }

    /// Creates a provider over [`default_fixture_table`].
    #[must_use]
    pub fn with_default_table() -> Self {
        Self::new(default_fixture_table())
    }

    /// Overrides the artificial latency.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Finds the entry for `(original, theme)`, falling back to any entry for
    /// `original`.
    #[must_use]
    pub fn lookup(&self, original_problem: &str, theme: &str) -> Option<&FixtureEntry> {
        self.entries
            .iter()
            .find(|entry| entry.original_problem == original_problem && entry.theme == theme)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|entry| entry.original_problem == original_problem)
            })
    }
}

#[async_trait]
impl RewriteProvider for FixtureRewriteProvider {
    async fn rewrite(&self, request: &RewriteRequest) -> Result<RewriteResponse, RewriteError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let response = self
            .lookup(request.original_problem(), request.theme())
            .map_or_else(
                || RewriteResponse::text(NO_REWRITE_AVAILABLE),
                |entry| RewriteResponse {
                    rewritten_problem: entry.rewritten_problem.clone(),
                    examples_used: Vec::new(),
                    notes: entry.notes(),
                },
            );
        Ok(response)
    }

    fn candidate_themes(&self, original_problem: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.original_problem == original_problem)
            .map(|entry| entry.theme.clone())
            .collect()
    }

    fn describe(&self) -> String {
        format!("simulated: {} canned rewrites", self.entries.len())
    }
}
