//! Provider abstraction and the never-failing fetch boundary.

use async_trait::async_trait;

use crate::error::RewriteError;

use super::model::{RewriteRequest, RewriteResponse, RewriteResult};

/// Source of rewritten problems shared by the TUI and CLI adapters.
///
/// The live HTTP client and the in-memory fixture table both implement this
/// trait, so either can be injected wherever a rewrite is needed.
#[async_trait]
pub trait RewriteProvider: Send + Sync + std::fmt::Debug {
    /// Rewrites a problem in the requested theme.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError`] when the provider cannot produce a rewrite.
    async fn rewrite(&self, request: &RewriteRequest) -> Result<RewriteResponse, RewriteError>;

    /// Ordered theme labels that retry may choose from for `original_problem`.
    fn candidate_themes(&self, original_problem: &str) -> Vec<String>;

    /// Short label describing the provider in the header.
    fn describe(&self) -> String;
}

/// Fetches a rewrite and folds any failure into an error record.
///
/// The returned record always echoes the request's problem and theme. This
/// call never fails outward; errors are logged and surfaced as
/// `rewritten_problem` text starting with `Error: `.
pub async fn fetch_rewritten_problem(
    provider: &dyn RewriteProvider,
    request: &RewriteRequest,
) -> RewriteResult {
    tracing::debug!(
        theme = request.theme(),
        num_examples = request.num_examples(),
        "requesting rewrite"
    );

    match provider.rewrite(request).await {
        Ok(response) => RewriteResult::from_response(request, response),
        Err(error) => {
            tracing::warn!(theme = request.theme(), "rewrite failed: {error}");
            RewriteResult::error(request, &error)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::RewriteError;
    use crate::rewrite::test_support::StubRewriteProvider;
    use crate::rewrite::{RewriteRequest, RewriteResponse};

    use super::fetch_rewritten_problem;

    #[tokio::test]
    async fn success_echoes_request_and_keeps_examples() {
        let provider = StubRewriteProvider::success(RewriteResponse {
            rewritten_problem: "The striker scored 10 goals twice.".to_owned(),
            examples_used: vec!["example one".to_owned()],
            notes: Vec::new(),
        });
        let request = RewriteRequest::new("10 + 10", "Football");

        let record = fetch_rewritten_problem(&provider, &request).await;

        assert_eq!(record.original_problem, "10 + 10");
        assert_eq!(record.theme, "Football");
        assert_eq!(record.examples_used, vec!["example one".to_owned()]);
    }

    #[tokio::test]
    async fn failure_becomes_error_record() {
        let provider = StubRewriteProvider::failure(RewriteError::health_status(503));
        let request = RewriteRequest::new("10 + 10", "Football");

        let record = fetch_rewritten_problem(&provider, &request).await;

        assert!(
            record.rewritten_problem.starts_with("Error: "),
            "expected error prefix, got {}",
            record.rewritten_problem
        );
        assert!(record.rewritten_problem.contains("Status: 503"));
        assert!(record.examples_used.is_empty());
        assert_eq!(record.theme, "Football");
    }
}
