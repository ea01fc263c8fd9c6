//! HTTP implementation of the rewrite provider.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::error::RewriteError;

use super::model::{MISSING_REWRITE_PLACEHOLDER, RewriteRequest, RewriteResponse};
use super::service::RewriteProvider;

/// Default rewrite service address.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const NO_RESPONSE_BODY: &str = "No response body";
const UNKNOWN_ERROR: &str = "Unknown error";

/// Configuration for [`HttpRewriteProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRewriteConfig {
    /// Base URL of the rewrite service (e.g., `http://127.0.0.1:8000`).
    pub base_url: String,
    /// HTTP timeout applied to every request.
    pub timeout: Duration,
    /// Theme catalogue offered to retry.
    pub themes: Vec<String>,
}

impl HttpRewriteConfig {
    /// Constructs configuration with explicit settings.
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout: Duration, themes: Vec<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
            themes,
        }
    }
}

/// Retrieval-index status reported by `GET /rag/status`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceStatus {
    /// Whether the example dataset loaded.
    pub dataset_loaded: bool,
    /// Number of examples in the dataset.
    pub num_examples: u64,
    /// Whether the similarity index was built.
    pub index_built: bool,
    /// Dataset location on the service host.
    pub excel_path: String,
}

/// Rewrite provider backed by the remote HTTP service.
#[derive(Debug, Clone)]
pub struct HttpRewriteProvider {
    client: Client,
    base_url: String,
    themes: Vec<String>,
}

impl HttpRewriteProvider {
    /// Creates a provider from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::Configuration`] when the base URL is not an
    /// absolute HTTP(S) URL or the HTTP client cannot be built.
    pub fn new(config: HttpRewriteConfig) -> Result<Self, RewriteError> {
        let parsed = Url::parse(config.base_url.as_str()).map_err(|error| {
            RewriteError::Configuration {
                message: format!("invalid API URL '{}': {error}", config.base_url),
            }
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(RewriteError::Configuration {
                message: format!("API URL must use http or https: {}", config.base_url),
            });
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|error| RewriteError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            themes: config.themes,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Probes `GET /health`.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::ServiceUnavailable`] when the service cannot be
    /// reached or answers with a non-success status.
    pub async fn check_health(&self) -> Result<(), RewriteError> {
        let url = self.endpoint("/health");
        tracing::debug!(url = %url, "probing rewrite service health");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(RewriteError::health_unreachable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RewriteError::health_status(status.as_u16()));
        }
        Ok(())
    }

    /// Probes health and then reads `GET /rag/status`.
    ///
    /// Returns `Ok(None)` when the service is healthy but its retrieval index
    /// is not available.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::ServiceUnavailable`] when the health probe
    /// fails, or [`RewriteError::MalformedResponse`] when the status payload
    /// cannot be decoded.
    pub async fn service_status(&self) -> Result<Option<ServiceStatus>, RewriteError> {
        self.check_health().await?;

        let response = self
            .client
            .get(self.endpoint("/rag/status"))
            .send()
            .await
            .map_err(|error| RewriteError::Network {
                message: error.to_string(),
            })?;

        if !response.status().is_success() {
            tracing::debug!(status = response.status().as_u16(), "retrieval index unavailable");
            return Ok(None);
        }

        let body = response.text().await.map_err(|error| RewriteError::Network {
            message: error.to_string(),
        })?;
        serde_json::from_str(body.as_str())
            .map(Some)
            .map_err(|error| RewriteError::MalformedResponse {
                message: error.to_string(),
            })
    }

    async fn post_rewrite(&self, request: &RewriteRequest) -> Result<RewriteResponse, RewriteError> {
        let url = self.endpoint("/rewrite");
        tracing::debug!(url = %url, "sending rewrite request");

        let response = self
            .client
            .post(url.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|error| RewriteError::Network {
                message: error.to_string(),
            })?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "rewrite response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_error_status(status, body.as_str(), url));
        }

        let body = response.text().await.map_err(|error| RewriteError::Network {
            message: error.to_string(),
        })?;
        let payload: RewriteResponsePayload =
            serde_json::from_str(body.as_str()).map_err(|error| {
                RewriteError::MalformedResponse {
                    message: error.to_string(),
                }
            })?;

        Ok(payload.into_response())
    }
}

#[async_trait]
impl RewriteProvider for HttpRewriteProvider {
    async fn rewrite(&self, request: &RewriteRequest) -> Result<RewriteResponse, RewriteError> {
        self.check_health().await?;
        self.post_rewrite(request).await
    }

    fn candidate_themes(&self, _original_problem: &str) -> Vec<String> {
        self.themes.clone()
    }

    fn describe(&self) -> String {
        format!("live: {}", self.base_url)
    }
}

#[derive(Debug, Deserialize)]
struct RewriteResponsePayload {
    rewritten_problem: Option<String>,
    examples_used: Option<Vec<ExampleUsed>>,
}

impl RewriteResponsePayload {
    fn into_response(self) -> RewriteResponse {
        let rewritten_problem = self
            .rewritten_problem
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| MISSING_REWRITE_PLACEHOLDER.to_owned());
        let examples_used = self
            .examples_used
            .unwrap_or_default()
            .into_iter()
            .map(ExampleUsed::into_display_text)
            .collect();

        RewriteResponse {
            rewritten_problem,
            examples_used,
            notes: Vec::new(),
        }
    }
}

/// One entry of `examples_used` in any shape the service emits.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExampleUsed {
    Text(String),
    Pair(ExamplePair),
    Other(serde_json::Value),
}

#[derive(Debug, Deserialize)]
struct ExamplePair {
    #[serde(alias = "Original Problem")]
    original: String,
    #[serde(alias = "Theme")]
    theme: String,
    #[serde(alias = "Rewritten Problem")]
    rewritten: String,
}

impl ExampleUsed {
    fn into_display_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Pair(pair) => format!(
                "Original: {} | Theme: {} | Rewritten: {}",
                pair.original, pair.theme, pair.rewritten
            ),
            Self::Other(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    detail: Option<serde_json::Value>,
}

fn map_error_status(status: StatusCode, body: &str, url: String) -> RewriteError {
    if status == StatusCode::NOT_FOUND {
        return RewriteError::EndpointNotFound { url };
    }

    RewriteError::Http {
        status: status.as_u16(),
        detail: render_detail(body),
    }
}

/// Renders the `detail` field of an error body as JSON text.
fn render_detail(body: &str) -> String {
    let detail = match serde_json::from_str::<ErrorPayload>(body) {
        Ok(payload) => payload
            .detail
            .filter(|value| !value.is_null())
            .unwrap_or_else(|| serde_json::Value::from(UNKNOWN_ERROR)),
        Err(_) => serde_json::Value::from(NO_RESPONSE_BODY),
    };
    detail.to_string()
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
