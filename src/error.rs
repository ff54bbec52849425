//! Error types for the summation client.
//!
//! This module provides structured error handling for llm-sum operations,
//! including categorization, severity levels, and retry guidance.
//!
//! # Error Types
//!
//! The main error type is [`SumError`], which covers all failure modes in
//! the order the call can hit them:
//! - Configuration errors (missing API key)
//! - Request failures (connection-level network issues)
//! - Transport errors (non-success HTTP status)
//! - Content-missing errors (reply envelope has no usable text)
//! - Non-numeric-response errors (reply text is not a number)
//!
//! Nothing is recovered internally: every failure aborts the call and is
//! surfaced to the direct caller. The crate never retries;
//! [`is_retryable()`](SumError::is_retryable) is guidance for callers that
//! layer their own retry policy on top.
//!
//! # Error Handling Example
//!
//! ```rust,no_run
//! use llm_sum::SumError;
//!
//! fn handle_error(err: SumError) {
//!     if err.is_retryable() {
//!         println!("Retryable error: {}", err);
//!     }
//!
//!     // Get user-friendly message
//!     let user_msg = err.user_message();
//!     println!("Tell user: {}", user_msg);
//!
//!     match err.category() {
//!         llm_sum::error::ErrorCategory::Client => {
//!             println!("Fix the request and try again");
//!         }
//!         _ => {
//!             println!("Provider issue, try again later");
//!         }
//!     }
//! }
//! ```
//!
//! # Result Type
//!
//! Use [`SumResult<T>`] as a convenient alias for `Result<T, SumError>`:
//!
//! ```rust
//! use llm_sum::SumResult;
//!
//! fn my_function() -> SumResult<f64> {
//!     Ok(42.0)
//! }
//! ```

use crate::logging::{log_error, log_warn};
use thiserror::Error;

// ============================================================================
// Error categorization types
// ============================================================================

/// High-level categorization of errors for routing and handling decisions.
///
/// Use [`SumError::category()`] to get the category for any error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// External service failures (the remote endpoint or the network).
    ///
    /// The provider or network had an issue. May be transient or indicate
    /// a provider outage.
    External,

    /// Client errors (missing credentials, bad configuration).
    ///
    /// The caller made a mistake that they can fix.
    Client,

    /// Temporary failures that a caller may choose to retry.
    ///
    /// Server-side 5xx statuses and connection drops. This crate itself
    /// never retries.
    Transient,
}

/// Severity level for logging and alerting decisions.
///
/// Use [`SumError::severity()`] to get the severity for any error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Action failed but system is stable.
    ///
    /// Should be logged and investigated but not urgent.
    Error,

    /// Unexpected but recoverable situation.
    ///
    /// Worth logging for monitoring but may not require action.
    Warning,
}

// ============================================================================
// Summation error types
// ============================================================================

/// Convenient result type for summation operations.
///
/// Alias for `Result<T, SumError>`.
pub type SumResult<T> = std::result::Result<T, SumError>;

/// Errors that can occur while delegating a sum to the remote model.
///
/// Each variant corresponds to one stage of the call, so a caller can tell
/// from the variant alone which step failed. Each can be:
/// - Categorized via [`category()`](Self::category)
/// - Assessed for severity via [`severity()`](Self::severity)
/// - Checked for retryability via [`is_retryable()`](Self::is_retryable)
/// - Converted to user-friendly messages via [`user_message()`](Self::user_message)
///
/// # Creating Errors
///
/// Use the constructor methods which automatically log the error:
///
/// ```rust
/// use llm_sum::SumError;
///
/// let err = SumError::configuration("Missing API key");
/// let err = SumError::http_status(401, "Unauthorized");
/// ```
///
/// # Error Categories
///
/// | Variant | Category | Retryable |
/// |---------|----------|-----------|
/// | `Configuration` | Client | No |
/// | `RequestFailed` | Transient | Yes |
/// | `Transport` (4xx) | Client | No |
/// | `Transport` (5xx) | Transient | Yes |
/// | `ContentMissing` | External | No |
/// | `NonNumericResponse` | External | No |
#[derive(Error, Debug)]
pub enum SumError {
    /// Configuration is incomplete: no API key could be resolved.
    ///
    /// Raised before any network activity. The message names both the
    /// call-site override and the environment variable.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },

    /// The HTTP request never produced a response.
    ///
    /// Connection refused, DNS failure, TLS handshake error and the like.
    /// Check the source error for the underlying cause.
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The endpoint answered with a non-success HTTP status.
    ///
    /// The message embeds the numeric status code and status text verbatim
    /// so callers and tests can distinguish, say, a 401 from a 503.
    #[error("API request failed: {status} {status_text}")]
    Transport {
        /// The numeric HTTP status code.
        status: u16,
        /// The canonical status text, e.g. "Unauthorized".
        status_text: String,
    },

    /// The reply envelope carried no usable message content.
    ///
    /// Either the body was not the expected chat-completion shape, or
    /// `choices[0].message.content` was absent or empty.
    #[error("No content in API response: {message}")]
    ContentMissing {
        /// Details about what was missing or malformed.
        message: String,
    },

    /// The reply text is not parseable as a number.
    ///
    /// The model answered, but with something other than the numeric
    /// result it was instructed to produce. The offending content is
    /// embedded for diagnosability.
    #[error("API returned non-numeric response: \"{content}\"")]
    NonNumericResponse {
        /// The trimmed reply content that failed numeric parsing.
        content: String,
    },
}

impl SumError {
    /// Get the error category for routing and handling decisions.
    ///
    /// - `Client`: fix the request (credentials, configuration)
    /// - `External`: provider returned something unusable
    /// - `Transient`: may succeed on a later attempt
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration { .. } => ErrorCategory::Client,
            Self::RequestFailed { .. } => ErrorCategory::Transient,
            Self::Transport { status, .. } if *status >= 500 => ErrorCategory::Transient,
            Self::Transport { .. } => ErrorCategory::Client,
            Self::ContentMissing { .. } => ErrorCategory::External,
            Self::NonNumericResponse { .. } => ErrorCategory::External,
        }
    }

    /// Get the error severity for logging and alerting.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Configuration { .. } => ErrorSeverity::Error,
            Self::RequestFailed { .. } => ErrorSeverity::Error,
            Self::Transport { .. } => ErrorSeverity::Error,
            Self::ContentMissing { .. } => ErrorSeverity::Warning,
            Self::NonNumericResponse { .. } => ErrorSeverity::Warning,
        }
    }

    /// Whether a caller-side retry could plausibly succeed.
    ///
    /// Returns `true` for connection-level failures and 5xx statuses.
    /// This crate never retries on its own; implement backoff yourself if
    /// you act on this.
    pub fn is_retryable(&self) -> bool {
        matches!(self.category(), ErrorCategory::Transient)
    }

    /// Convert to a user-friendly message suitable for display.
    ///
    /// Returns a message that's safe to show to end users - technical
    /// details and internal information are stripped or generalized.
    pub fn user_message(&self) -> String {
        match self {
            Self::Configuration { .. } => {
                "AI service configuration issue. Please check your settings".to_string()
            }
            Self::RequestFailed { .. } => {
                "Unable to reach the AI service. Please try again".to_string()
            }
            Self::Transport { .. } => {
                "The AI service rejected the request. Please try again".to_string()
            }
            Self::ContentMissing { .. } => {
                "Received an empty response from the AI service".to_string()
            }
            Self::NonNumericResponse { .. } => {
                "The AI service did not return a numeric answer".to_string()
            }
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================
    //
    // These methods automatically log the error at the appropriate level.
    // Use them instead of constructing variants directly.

    /// Create a configuration error (logs at ERROR level).
    pub fn configuration(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration",
            message = %message,
            "Summation configuration validation failed"
        );
        Self::Configuration { message }
    }

    /// Create a connection-level request failure (logs at ERROR level).
    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "Chat-completion request execution failed"
        );
        Self::RequestFailed { message, source }
    }

    /// Create a transport error from a non-success HTTP status (logs at ERROR level).
    pub fn http_status(status: u16, status_text: impl Into<String>) -> Self {
        let status_text = status_text.into();
        log_error!(
            error_type = "transport",
            status = status,
            status_text = %status_text,
            "Chat-completion endpoint returned non-success status"
        );
        Self::Transport {
            status,
            status_text,
        }
    }

    /// Create a content-missing error (logs at WARN level).
    pub fn content_missing(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "content_missing",
            message = %message,
            "Chat-completion reply carried no usable content"
        );
        Self::ContentMissing { message }
    }

    /// Create a non-numeric-response error (logs at WARN level).
    pub fn non_numeric(content: impl Into<String>) -> Self {
        let content = content.into();
        log_warn!(
            error_type = "non_numeric_response",
            content = %content,
            "Chat-completion reply was not a number"
        );
        Self::NonNumericResponse { content }
    }
}
