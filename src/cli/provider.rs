//! Provider selection from configuration.

use std::sync::Arc;

use reframe::rewrite::{FixtureRewriteProvider, HttpRewriteProvider, RewriteProvider};
use reframe::{ProviderKind, ReframeConfig, RewriteError};

/// Builds the rewrite provider named by `config.provider`.
///
/// # Errors
///
/// Returns [`RewriteError::Configuration`] when the provider name, API URL,
/// or theme catalogue is invalid.
pub fn build_provider(config: &ReframeConfig) -> Result<Arc<dyn RewriteProvider>, RewriteError> {
    let kind = config.provider_kind()?;
    tracing::debug!(provider = %kind, "selected rewrite provider");

    match kind {
        ProviderKind::Live => Ok(Arc::new(HttpRewriteProvider::new(config.http_config()?)?)),
        ProviderKind::Simulated => Ok(Arc::new(
            FixtureRewriteProvider::with_default_table().with_latency(config.simulated_latency()),
        )),
    }
}
