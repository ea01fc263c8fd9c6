//! Service status mode probing `/health` and `/rag/status`.

use std::io::{self, Write};

use reframe::rewrite::HttpRewriteProvider;
use reframe::{ReframeConfig, RewriteError};

use super::output::write_service_status;

/// Probes the rewrite service and prints its status.
///
/// # Errors
///
/// Returns [`RewriteError::ServiceUnavailable`] when the health probe fails,
/// or another [`RewriteError`] for invalid configuration, an undecodable
/// status payload, or output failures.
pub async fn run(config: &ReframeConfig) -> Result<(), RewriteError> {
    let provider = HttpRewriteProvider::new(config.http_config()?)?;
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    run_with_provider(&mut writer, config.api_url.as_str(), &provider).await
}

async fn run_with_provider<W: Write>(
    writer: &mut W,
    api_url: &str,
    provider: &HttpRewriteProvider,
) -> Result<(), RewriteError> {
    let status = provider.service_status().await?;
    write_service_status(writer, api_url, status.as_ref())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use reframe::RewriteError;
    use reframe::config::default_themes;
    use reframe::rewrite::{HttpRewriteConfig, HttpRewriteProvider};

    use super::run_with_provider;

    fn provider_for(server: &MockServer) -> HttpRewriteProvider {
        HttpRewriteProvider::new(HttpRewriteConfig::new(
            server.uri(),
            Duration::from_secs(5),
            default_themes(),
        ))
        .expect("provider should build")
    }

    #[tokio::test]
    async fn healthy_service_prints_index_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rag/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "dataset_loaded": true,
                "num_examples": 120,
                "index_built": true,
                "excel_path": "data/problems.xlsx"
            })))
            .mount(&server)
            .await;
        let mut output = Vec::new();

        let result = run_with_provider(&mut output, &server.uri(), &provider_for(&server)).await;

        assert!(result.is_ok(), "status check should succeed: {result:?}");
        let output_text = String::from_utf8(output).unwrap_or_default();
        assert!(output_text.contains(": healthy"));
        assert!(output_text.contains("(120 examples)"));
    }

    #[tokio::test]
    async fn unhealthy_service_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        let mut output = Vec::new();

        let result = run_with_provider(&mut output, &server.uri(), &provider_for(&server)).await;

        assert!(matches!(result, Err(RewriteError::ServiceUnavailable { .. })));
        assert!(output.is_empty());
    }
}
