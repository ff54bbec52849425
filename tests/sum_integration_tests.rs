//! Integration Tests for the Summation Client over HTTP
//!
//! UNIT UNDER TEST: sum / sum_with over the real reqwest transport
//!
//! BUSINESS RESPONSIBILITY:
//!   - Execute one HTTP request to the chat-completion endpoint with
//!     bearer authentication
//!   - Resolve configuration from options, environment, and defaults
//!   - Parse successful replies into a number
//!   - Surface transport, content and parsing failures distinctly
//!
//! TEST COVERAGE:
//!   - Successful request and numeric reply parsing
//!   - Outbound URL path, authorization header and body shape
//!   - Environment-variable credential fallback
//!   - Missing credential aborts before any request is made
//!   - Authentication errors (401) and server errors (500)
//!   - Non-numeric and contentless replies

use llm_sum::{sum, sum_with, SumError, SumOptions};
use serial_test::serial;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

fn chat_reply(content: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [{
            "message": {
                "role": "assistant",
                "content": content
            },
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 25,
            "completion_tokens": 1,
            "total_tokens": 26
        }
    })
}

async fn mount_reply(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply(content)))
        .mount(server)
        .await;
}

fn options_for(server: &MockServer) -> SumOptions {
    SumOptions::new()
        .with_api_key("test-key")
        .with_base_url(server.uri())
}

fn clear_env() {
    std::env::remove_var("OPENAI_API_KEY");
    std::env::remove_var("OPENAI_BASE_URL");
    std::env::remove_var("OPENAI_MODEL");
}

// ============================================================================
// Success Path Tests
// ============================================================================

#[tokio::test]
async fn test_returns_the_sum_the_model_replied_with() {
    let server = MockServer::start().await;
    mount_reply(&server, "5").await;

    let result = sum_with(2.0, 3.0, options_for(&server)).await.unwrap();

    assert_eq!(result, 5.0);
}

#[tokio::test]
async fn test_reply_with_surrounding_whitespace_still_parses() {
    let server = MockServer::start().await;
    mount_reply(&server, "  42.5\n").await;

    let result = sum_with(40.0, 2.5, options_for(&server)).await.unwrap();

    assert_eq!(result, 42.5);
}

#[tokio::test]
async fn test_sends_correct_request_shape() {
    // URL path, bearer header, model and the exact user prompt

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer sk-test"))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(serde_json::json!({
            "model": "custom-model",
            "messages": [
                {"role": "system"},
                {"role": "user", "content": "What is 3 + 4?"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("7")))
        .expect(1)
        .mount(&server)
        .await;

    let options = SumOptions::new()
        .with_api_key("sk-test")
        .with_base_url(server.uri())
        .with_model("custom-model");

    let result = sum_with(3.0, 4.0, options).await.unwrap();

    assert_eq!(result, 7.0);
}

#[tokio::test]
async fn test_negative_and_fractional_operands_in_prompt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(serde_json::json!({
            "messages": [
                {"role": "system"},
                {"role": "user", "content": "What is -1.5 + 2.25?"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("0.75")))
        .mount(&server)
        .await;

    let result = sum_with(-1.5, 2.25, options_for(&server)).await.unwrap();

    assert_eq!(result, 0.75);
}

// ============================================================================
// Environment Fallback Tests (serial - mutate process environment)
// ============================================================================

#[tokio::test]
#[serial]
async fn test_reads_api_key_from_environment() {
    let server = MockServer::start().await;
    clear_env();
    std::env::set_var("OPENAI_API_KEY", "env-key");
    std::env::set_var("OPENAI_BASE_URL", server.uri());

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer env-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("10")))
        .expect(1)
        .mount(&server)
        .await;

    let result = sum(4.0, 6.0).await.unwrap();

    assert_eq!(result, 10.0);
    clear_env();
}

#[tokio::test]
#[serial]
async fn test_environment_model_is_sent_when_not_overridden() {
    let server = MockServer::start().await;
    clear_env();
    std::env::set_var("OPENAI_MODEL", "env-model");

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(serde_json::json!({"model": "env-model"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("3")))
        .expect(1)
        .mount(&server)
        .await;

    let result = sum_with(1.0, 2.0, options_for(&server)).await.unwrap();

    assert_eq!(result, 3.0);
    clear_env();
}

#[tokio::test]
#[serial]
async fn test_missing_api_key_fails_without_any_request() {
    let server = MockServer::start().await;
    clear_env();

    // Any request reaching the server would fail the expectation on drop
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("3")))
        .expect(0)
        .mount(&server)
        .await;

    let err = sum_with(1.0, 2.0, SumOptions::new().with_base_url(server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, SumError::Configuration { .. }));
    let message = err.to_string();
    assert!(
        message.contains("OPENAI_API_KEY"),
        "Error should name the environment variable: {message}"
    );
}

// ============================================================================
// Failure Path Tests
// ============================================================================

#[tokio::test]
async fn test_unauthorized_status_surfaces_as_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let err = sum_with(1.0, 2.0, options_for(&server)).await.unwrap_err();

    assert!(matches!(err, SumError::Transport { status: 401, .. }));
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_server_error_surfaces_as_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = sum_with(1.0, 2.0, options_for(&server)).await.unwrap_err();

    assert!(matches!(err, SumError::Transport { status: 500, .. }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_non_numeric_reply_embeds_content_in_error() {
    let server = MockServer::start().await;
    mount_reply(&server, "I cannot do math").await;

    let err = sum_with(1.0, 2.0, options_for(&server)).await.unwrap_err();

    assert!(matches!(err, SumError::NonNumericResponse { .. }));
    assert!(err.to_string().contains("I cannot do math"));
}

#[tokio::test]
async fn test_reply_without_content_is_content_missing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"choices": [{"message": {"role": "assistant"}}]})),
        )
        .mount(&server)
        .await;

    let err = sum_with(1.0, 2.0, options_for(&server)).await.unwrap_err();

    assert!(matches!(err, SumError::ContentMissing { .. }));
}

#[tokio::test]
async fn test_non_json_success_body_is_content_missing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = sum_with(1.0, 2.0, options_for(&server)).await.unwrap_err();

    assert!(matches!(err, SumError::ContentMissing { .. }));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_request_failed() {
    // Nothing listens on this port; the request never gets a status

    let options = SumOptions::new()
        .with_api_key("test-key")
        .with_base_url("http://127.0.0.1:1");

    let err = sum_with(1.0, 2.0, options).await.unwrap_err();

    assert!(matches!(err, SumError::RequestFailed { .. }));
    assert!(err.is_retryable());
}
