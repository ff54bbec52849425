//! HTTP transport for the chat-completion call.
//!
//! The boundary is deliberately thin: send one request, get status plus
//! body back. Status interpretation and body parsing stay in the client,
//! so a test can substitute a fake transport and exercise every failure
//! stage without network access.

use crate::error::{SumError, SumResult};
use crate::logging::log_debug;
use crate::protocol::ChatRequest;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

/// Raw outcome of one HTTP exchange: status line plus body text.
///
/// Produced only when the server answered at all; connection-level
/// failures surface as [`SumError::RequestFailed`] instead.
#[derive(Debug, Clone)]
pub struct TransportReply {
    /// Numeric HTTP status code.
    pub status: u16,
    /// Canonical status text, e.g. "OK" or "Unauthorized".
    pub status_text: String,
    /// Response body as text, regardless of status.
    pub body: String,
}

impl TransportReply {
    /// Whether the status is in the 2xx success range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal "send request, get status+body" capability.
///
/// Implemented by [`ReqwestTransport`] for real calls and by fakes in
/// tests. One invocation per [`send_chat`](Self::send_chat) call; nothing
/// is pooled or shared at this layer beyond what the implementation's own
/// HTTP client does internally.
#[async_trait]
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    /// POST the serialized chat request to `url` with `api_key` as bearer
    /// token. Returns whatever the server answered, success or not.
    ///
    /// # Errors
    ///
    /// Returns [`SumError::RequestFailed`] when no response was obtained
    /// at all (connection refused, DNS failure, broken stream).
    async fn send_chat(
        &self,
        url: &str,
        api_key: &str,
        request: &ChatRequest,
    ) -> SumResult<TransportReply>;
}

/// Production transport backed by a shared `reqwest::Client`.
///
/// The inner client is built once per transport instance; connection
/// pooling across calls is its concern, not part of this crate's
/// contract. No timeout is configured - deadlines belong to the caller.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a fresh HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the headers every chat-completion request carries.
    ///
    /// # Errors
    ///
    /// Returns [`SumError::Configuration`] if the API key contains bytes
    /// that are not valid in an HTTP header value.
    pub fn build_auth_headers(api_key: &str) -> SumResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let bearer = format!("Bearer {api_key}");
        let value = HeaderValue::from_str(&bearer).map_err(|_| {
            SumError::configuration("API key contains characters not valid in an HTTP header")
        })?;
        headers.insert(AUTHORIZATION, value);

        Ok(headers)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send_chat(
        &self,
        url: &str,
        api_key: &str,
        request: &ChatRequest,
    ) -> SumResult<TransportReply> {
        let headers = Self::build_auth_headers(api_key)?;

        log_debug!(url = %url, model = %request.model, "Sending chat-completion request");

        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                SumError::request_failed(
                    format!("Failed to reach {url}: {e}"),
                    Some(Box::new(e)),
                )
            })?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or("Unknown").to_string();

        let body = response.text().await.map_err(|e| {
            SumError::request_failed(
                format!("Failed to read response body: {e}"),
                Some(Box::new(e)),
            )
        })?;

        log_debug!(
            status = status.as_u16(),
            body_len = body.len(),
            "Received chat-completion response"
        );

        Ok(TransportReply {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}
