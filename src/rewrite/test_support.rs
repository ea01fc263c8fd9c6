//! Test-support utilities for rewrite flows.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::RewriteError;

use super::{RewriteProvider, RewriteRequest, RewriteResponse};

/// Deterministic provider stub used by unit and behavioural tests.
///
/// Records every request it receives so tests can assert on the theme that
/// retry picked.
#[derive(Debug)]
pub struct StubRewriteProvider {
    response: Result<RewriteResponse, RewriteError>,
    themes: Vec<String>,
    requests: Mutex<Vec<RewriteRequest>>,
}

impl StubRewriteProvider {
    /// Creates a stub that always returns `response`.
    #[must_use]
    pub const fn success(response: RewriteResponse) -> Self {
        Self {
            response: Ok(response),
            themes: Vec::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Creates a stub that always returns `error`.
    #[must_use]
    pub const fn failure(error: RewriteError) -> Self {
        Self {
            response: Err(error),
            themes: Vec::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Sets the candidate themes offered to retry.
    #[must_use]
    pub fn with_themes(mut self, themes: &[&str]) -> Self {
        self.themes = themes.iter().map(|theme| (*theme).to_owned()).collect();
        self
    }

    /// Returns every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RewriteRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl RewriteProvider for StubRewriteProvider {
    async fn rewrite(&self, request: &RewriteRequest) -> Result<RewriteResponse, RewriteError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        self.response.clone()
    }

    fn candidate_themes(&self, _original_problem: &str) -> Vec<String> {
        self.themes.clone()
    }

    fn describe(&self) -> String {
        "stub".to_owned()
    }
}
