//! Rewrite client: request models, providers, and retry theme selection.
//!
//! [`RewriteProvider`] is the seam between the UI and the source of
//! rewrites. [`HttpRewriteProvider`] talks to the remote service;
//! [`FixtureRewriteProvider`] answers from an in-memory table with an
//! artificial delay. [`fetch_rewritten_problem`] wraps either one so that
//! callers always receive a displayable [`RewriteResult`].

mod fixture;
mod http;
mod model;
pub mod retry;
mod service;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use fixture::{
    DEFAULT_SIMULATED_LATENCY, FixtureEntry, FixtureRewriteProvider, default_fixture_table,
};
pub use http::{DEFAULT_API_URL, HttpRewriteConfig, HttpRewriteProvider, ServiceStatus};
pub use model::{
    DEFAULT_NUM_EXAMPLES, ERROR_PREFIX, MISSING_REWRITE_PLACEHOLDER, NO_OTHER_THEMES_TEXT,
    NO_REWRITE_AVAILABLE, NO_THEME_LABEL, RewriteRequest, RewriteResponse, RewriteResult,
};
pub use retry::{RetryPolicy, RetryPolicyParseError, select_retry_theme};
pub use service::{RewriteProvider, fetch_rewritten_problem};
