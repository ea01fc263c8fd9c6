//! Non-interactive mode rewriting a single problem.

use std::io::{self, Write};

use reframe::rewrite::{RewriteProvider, RewriteRequest, fetch_rewritten_problem};
use reframe::telemetry::{StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
use reframe::{ReframeConfig, RewriteError};

use super::output::write_record;
use super::provider::build_provider;

/// Rewrites `--problem` in `--theme` and prints the record.
///
/// Provider failures are printed as an error record, not returned.
///
/// # Errors
///
/// Returns an error if required configuration is missing or invalid, or if
/// writing output fails.
pub async fn run(config: &ReframeConfig) -> Result<(), RewriteError> {
    let provider = build_provider(config)?;
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    run_with_provider(
        &mut writer,
        config,
        provider.as_ref(),
        &StderrJsonlTelemetrySink,
    )
    .await
}

async fn run_with_provider<W: Write>(
    writer: &mut W,
    config: &ReframeConfig,
    provider: &dyn RewriteProvider,
    telemetry: &dyn TelemetrySink,
) -> Result<(), RewriteError> {
    let (raw_problem, theme) = config.require_problem_and_theme()?;
    let problem = raw_problem.trim();
    if problem.is_empty() {
        return Err(RewriteError::Configuration {
            message: "the problem text is empty".to_owned(),
        });
    }

    let request = RewriteRequest::new(problem, theme.trim()).with_num_examples(config.num_examples);
    let started = tokio::time::Instant::now();
    let record = fetch_rewritten_problem(provider, &request).await;
    telemetry.record(TelemetryEvent::RewriteCompleted {
        theme: record.theme.clone(),
        latency_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        fallback: record.is_error(),
    });

    write_record(writer, &record)
}
