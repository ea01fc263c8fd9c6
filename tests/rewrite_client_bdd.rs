//! Behavioural tests for the rewrite client against a stub service.

mod support {
    #[path = "../support/runtime.rs"]
    pub mod runtime;
}

use std::time::Duration;

use reframe::rewrite::{HttpRewriteConfig, HttpRewriteProvider, RewriteRequest, RewriteResult};
use reframe::{config::default_themes, fetch_rewritten_problem};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::json;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use support::runtime::SharedRuntime;

#[derive(ScenarioState, Default)]
struct ClientState {
    runtime: Slot<SharedRuntime>,
    server: Slot<MockServer>,
    record: Slot<RewriteResult>,
}

#[fixture]
fn client_state() -> ClientState {
    ClientState::default()
}

type StepResult = Result<(), Box<dyn std::error::Error>>;

/// Ensures a Tokio runtime and Wiremock server are initialised.
fn ensure_runtime_and_server(state: &ClientState) -> Result<SharedRuntime, Box<dyn std::error::Error>> {
    if state.runtime.with_ref(|_| ()).is_none() {
        state.runtime.set(SharedRuntime::new(Runtime::new()?));
    }

    let shared_runtime = state
        .runtime
        .get()
        .ok_or("runtime not initialised after set")?;

    if state.server.with_ref(|_| ()).is_none() {
        state.server.set(shared_runtime.block_on(MockServer::start()));
    }

    Ok(shared_runtime)
}

fn mount(state: &ClientState, mock: Mock) -> StepResult {
    let runtime = ensure_runtime_and_server(state)?;
    state
        .server
        .with_ref(|server| runtime.block_on(mock.mount(server)))
        .ok_or("server should be initialised")?;
    Ok(())
}

fn record(state: &ClientState) -> Result<RewriteResult, Box<dyn std::error::Error>> {
    state
        .record
        .get()
        .ok_or_else(|| "the client should have produced a record".into())
}

#[given("a rewrite service that is healthy")]
fn given_healthy_service(client_state: &ClientState) -> StepResult {
    mount(
        client_state,
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"}))),
    )
}

#[given("a rewrite service whose health probe answers {status}")]
fn given_unhealthy_service(client_state: &ClientState, status: u16) -> StepResult {
    mount(
        client_state,
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(status)),
    )
}

#[given("the service rewrites problems as {text}")]
fn given_rewrite_response(client_state: &ClientState, text: String) -> StepResult {
    mount(
        client_state,
        Mock::given(method("POST"))
            .and(path("/rewrite"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "rewritten_problem": text.trim_matches('"'),
                "examples_used": [
                    "Original: 2 + 2 | Theme: Football | Rewritten: Two goals and two more.",
                    {"original": "3 + 3", "theme": "Football", "rewritten": "Three and three."}
                ]
            }))),
    )
}

#[given("the service has no rewrite endpoint")]
fn given_missing_endpoint(client_state: &ClientState) -> StepResult {
    mount(
        client_state,
        Mock::given(method("POST"))
            .and(path("/rewrite"))
            .respond_with(ResponseTemplate::new(404)),
    )
}

#[when("the client asks for {problem} in theme {theme}")]
fn when_client_asks(client_state: &ClientState, problem: String, theme: String) -> StepResult {
    let runtime = ensure_runtime_and_server(client_state)?;
    let base_url = client_state
        .server
        .with_ref(MockServer::uri)
        .ok_or("server should be initialised")?;
    let provider = HttpRewriteProvider::new(HttpRewriteConfig::new(
        base_url,
        Duration::from_secs(5),
        default_themes(),
    ))?;
    let request = RewriteRequest::new(problem.trim_matches('"'), theme.trim_matches('"'));

    let result = runtime.block_on(fetch_rewritten_problem(&provider, &request));
    client_state.record.set(result);
    Ok(())
}

#[then("the record original problem is {text}")]
fn then_original_is(client_state: &ClientState, text: String) -> StepResult {
    let actual = record(client_state)?.original_problem;
    let expected = text.trim_matches('"');
    if actual != expected {
        return Err(format!("expected original '{expected}', got '{actual}'").into());
    }
    Ok(())
}

#[then("the record theme is {text}")]
fn then_theme_is(client_state: &ClientState, text: String) -> StepResult {
    let actual = record(client_state)?.theme;
    let expected = text.trim_matches('"');
    if actual != expected {
        return Err(format!("expected theme '{expected}', got '{actual}'").into());
    }
    Ok(())
}

#[then("the record rewrite is {text}")]
fn then_rewrite_is(client_state: &ClientState, text: String) -> StepResult {
    let actual = record(client_state)?.rewritten_problem;
    let expected = text.trim_matches('"');
    if actual != expected {
        return Err(format!("expected rewrite '{expected}', got '{actual}'").into());
    }
    Ok(())
}

#[then("the record rewrite starts with {text}")]
fn then_rewrite_starts_with(client_state: &ClientState, text: String) -> StepResult {
    let actual = record(client_state)?.rewritten_problem;
    let expected = text.trim_matches('"');
    if !actual.starts_with(expected) {
        return Err(format!("expected rewrite to start with '{expected}', got '{actual}'").into());
    }
    Ok(())
}

#[then("the record rewrite contains {text}")]
fn then_rewrite_contains(client_state: &ClientState, text: String) -> StepResult {
    let actual = record(client_state)?.rewritten_problem;
    let expected = text.trim_matches('"');
    if !actual.contains(expected) {
        return Err(format!("expected rewrite to contain '{expected}', got '{actual}'").into());
    }
    Ok(())
}

#[then("the record lists {count} examples")]
fn then_example_count(client_state: &ClientState, count: usize) -> StepResult {
    let examples = record(client_state)?.examples_used;
    if examples.len() != count {
        return Err(format!("expected {count} examples, got {examples:?}").into());
    }
    Ok(())
}

#[scenario(path = "tests/features/rewrite_client.feature", index = 0)]
fn healthy_service_echoes_request(client_state: ClientState) {
    let _ = client_state;
}

#[scenario(path = "tests/features/rewrite_client.feature", index = 1)]
fn failing_health_probe_becomes_error_record(client_state: ClientState) {
    let _ = client_state;
}

#[scenario(path = "tests/features/rewrite_client.feature", index = 2)]
fn missing_endpoint_names_url(client_state: ClientState) {
    let _ = client_state;
}
