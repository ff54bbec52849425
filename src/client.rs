//! Summation client: the one operation this crate exposes.
//!
//! Resolves configuration, builds the calculator prompt, performs a
//! single HTTP exchange through the transport seam, and parses the reply
//! into a number. Exactly one outbound request per call, no retries, no
//! state carried between calls.

use crate::config::{EnvSnapshot, ResolvedConfig, SumOptions};
use crate::error::{SumError, SumResult};
use crate::logging::log_debug;
use crate::protocol::ChatRequest;
use crate::response_parser::ResponseParser;
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;

/// Client that delegates addition to a chat-completion endpoint.
///
/// Holds only the transport; configuration is resolved fresh on every
/// call so environment changes between calls are observed. The client is
/// cheap to clone and safe to share across tasks.
///
/// # Example
///
/// ```rust,no_run
/// use llm_sum::{SumClient, SumOptions};
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = SumClient::new();
/// let options = SumOptions::new().with_api_key("your-api-key");
/// let result = client.sum(2.0, 3.0, options).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SumClient {
    transport: Arc<dyn HttpTransport>,
}

impl Default for SumClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SumClient {
    /// Create a client backed by the real HTTP transport.
    pub fn new() -> Self {
        Self {
            transport: Arc::new(ReqwestTransport::new()),
        }
    }

    /// Create a client with an injected transport.
    ///
    /// Tests use this to substitute a fake and observe the outbound
    /// request without network access.
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Ask the remote model for `a + b`.
    ///
    /// Reads the process environment for fallback configuration at call
    /// time, then runs the request/validate/parse pipeline. Every failure
    /// is terminal for this call; see [`SumError`] for the taxonomy.
    ///
    /// # Errors
    ///
    /// - [`SumError::Configuration`] - no API key resolvable; returned
    ///   before any network activity
    /// - [`SumError::RequestFailed`] - the endpoint could not be reached
    /// - [`SumError::Transport`] - the endpoint answered with a
    ///   non-success status
    /// - [`SumError::ContentMissing`] - the reply carried no usable text
    /// - [`SumError::NonNumericResponse`] - the reply text is not a number
    pub async fn sum(&self, a: f64, b: f64, options: SumOptions) -> SumResult<f64> {
        let env = EnvSnapshot::capture();
        self.sum_resolved(a, b, &options, &env).await
    }

    /// Same pipeline over an explicit environment snapshot.
    ///
    /// Kept separate so tests can drive resolution without mutating the
    /// real process environment.
    pub(crate) async fn sum_resolved(
        &self,
        a: f64,
        b: f64,
        options: &SumOptions,
        env: &EnvSnapshot,
    ) -> SumResult<f64> {
        let config = ResolvedConfig::resolve(options, env)?;
        let request = ChatRequest::sum_prompt(&config.model, a, b);
        let url = config.completions_url();

        log_debug!(a = a, b = b, model = %config.model, "Delegating sum to remote model");

        let reply = self
            .transport
            .send_chat(&url, &config.api_key, &request)
            .await?;

        if !reply.is_success() {
            return Err(SumError::http_status(reply.status, reply.status_text));
        }

        let content = ResponseParser::extract_content(&reply.body)?;
        let result = ResponseParser::parse_numeric(&content)?;

        log_debug!(a = a, b = b, result = result, "Remote model answered");
        Ok(result)
    }
}

/// Compute `a + b` via the remote model using ambient configuration.
///
/// Equivalent to [`sum_with`] with empty options: everything falls back
/// to the environment, so `OPENAI_API_KEY` must be set.
pub async fn sum(a: f64, b: f64) -> SumResult<f64> {
    sum_with(a, b, SumOptions::new()).await
}

/// Compute `a + b` via the remote model with per-call overrides.
///
/// Each option field that is `None` falls back to its environment
/// variable and then (except the API key) to a built-in default.
pub async fn sum_with(a: f64, b: f64, options: SumOptions) -> SumResult<f64> {
    SumClient::new().sum(a, b, options).await
}
