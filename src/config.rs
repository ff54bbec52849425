//! Configuration resolution for the summation client.
//!
//! Every field resolves independently, first present value wins:
//! explicit call option, then environment variable, then built-in default.
//! The API key has no default and must resolve to a present value before
//! any network call is attempted.
//!
//! Resolution is a pure function over `(SumOptions, EnvSnapshot)` so tests
//! can exercise every fallback combination without mutating real process
//! state. [`EnvSnapshot::capture`] is the only place the process
//! environment is read, and it is read at call time - a later call
//! observes updated environment state.

use crate::error::{SumError, SumResult};
use crate::logging::log_debug;

/// Environment variable holding the API key. No built-in default exists.
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";

/// Environment variable overriding the endpoint base URL.
pub const ENV_BASE_URL: &str = "OPENAI_BASE_URL";

/// Environment variable overriding the model identifier.
pub const ENV_MODEL: &str = "OPENAI_MODEL";

/// Endpoint base used when neither an explicit option nor the environment
/// provides one. The fixed `/chat/completions` path is appended to this.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Model identifier used when neither an explicit option nor the
/// environment provides one.
pub const DEFAULT_MODEL: &str = "gpt-5.2";

/// Per-call configuration overrides, each field individually optional.
///
/// Any field left `None` falls back to the corresponding environment
/// variable, then (for `base_url` and `model`) to the built-in default.
///
/// # Example
///
/// ```rust
/// use llm_sum::SumOptions;
///
/// let options = SumOptions::new()
///     .with_api_key("sk-test")
///     .with_base_url("https://custom.api.com/v1")
///     .with_model("custom-model");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SumOptions {
    /// Bearer token for the endpoint. Falls back to `OPENAI_API_KEY`.
    pub api_key: Option<String>,
    /// Endpoint base URL. Falls back to `OPENAI_BASE_URL`, then
    /// `"https://api.openai.com/v1"`.
    pub base_url: Option<String>,
    /// Model identifier. Falls back to `OPENAI_MODEL`, then `"gpt-5.2"`.
    pub model: Option<String>,
}

impl SumOptions {
    /// Create empty options: every field falls back.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key override.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the endpoint base URL override.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the model identifier override.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Point-in-time capture of the environment variables this crate consumes.
///
/// Taken fresh on every call so environment changes between calls are
/// observed. Tests construct snapshots directly instead of mutating the
/// process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    /// Value of `OPENAI_API_KEY`, if set.
    pub api_key: Option<String>,
    /// Value of `OPENAI_BASE_URL`, if set.
    pub base_url: Option<String>,
    /// Value of `OPENAI_MODEL`, if set.
    pub model: Option<String>,
}

impl EnvSnapshot {
    /// Read the three environment variables from the process environment.
    ///
    /// Unset or non-unicode values are treated as absent.
    pub fn capture() -> Self {
        Self {
            api_key: std::env::var(ENV_API_KEY).ok(),
            base_url: std::env::var(ENV_BASE_URL).ok(),
            model: std::env::var(ENV_MODEL).ok(),
        }
    }

    /// A snapshot with nothing set. Useful in tests.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Fully resolved configuration for one call.
///
/// Produced by [`ResolvedConfig::resolve`]; by construction the API key is
/// present, so holders of this type are cleared to go to the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Bearer token for the `Authorization` header.
    pub api_key: String,
    /// Endpoint base URL the `/chat/completions` path is appended to.
    pub base_url: String,
    /// Model identifier sent in the request body.
    pub model: String,
}

impl ResolvedConfig {
    /// Resolve per-field: explicit option, then environment, then default.
    ///
    /// # Errors
    ///
    /// Returns [`SumError::Configuration`] if no API key is present in
    /// either the options or the snapshot. No network activity has
    /// happened at that point.
    pub fn resolve(options: &SumOptions, env: &EnvSnapshot) -> SumResult<Self> {
        let api_key = options
            .api_key
            .clone()
            .or_else(|| env.api_key.clone())
            .ok_or_else(|| {
                SumError::configuration(format!(
                    "No API key provided. Set {ENV_API_KEY} or pass api_key in options."
                ))
            })?;

        let base_url = options
            .base_url
            .clone()
            .or_else(|| env.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let model = options
            .model
            .clone()
            .or_else(|| env.model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        log_debug!(
            base_url = %base_url,
            model = %model,
            api_key_from_env = options.api_key.is_none(),
            "Resolved summation configuration"
        );

        Ok(Self {
            api_key,
            base_url,
            model,
        })
    }

    /// The full URL the chat-completion request is posted to.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}
