//! # llm-sum
//!
//! Compute the sum of two numbers by delegating the arithmetic to an
//! OpenAI-compatible chat-completion endpoint.
//!
//! There is no arithmetic in this crate. The whole job is building one HTTP
//! request, validating one HTTP response, and coercing the model's free-form
//! reply into a number with well-defined failure modes.
//!
//! ## Key Features
//!
//! - **Layered configuration**: explicit options fall back to environment
//!   variables fall back to built-in defaults
//! - **Structured errors**: every failure stage has its own [`SumError`]
//!   variant with category and severity metadata
//! - **Testable transport**: the HTTP boundary is a trait, so tests can
//!   substitute a fake without network access
//!
//! ## Example
//!
//! ```rust,no_run
//! use llm_sum::{sum_with, SumOptions};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let options = SumOptions::new().with_api_key("your-api-key");
//! let result = sum_with(2.0, 3.0, options).await?;
//! assert_eq!(result, 5.0);
//! # Ok(())
//! # }
//! ```
//!
//! With `OPENAI_API_KEY` set in the environment, the shorthand works too:
//!
//! ```rust,no_run
//! # async fn example() -> anyhow::Result<()> {
//! let result = llm_sum::sum(2.0, 3.0).await?;
//! # Ok(())
//! # }
//! ```
//!
//! No timeout is imposed internally and nothing is ever retried; wrap the
//! call with `tokio::time::timeout` if you need a deadline.

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub(crate) mod response_parser;
pub mod transport;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use client::{sum, sum_with, SumClient};
pub use config::{EnvSnapshot, ResolvedConfig, SumOptions};
pub use error::{SumError, SumResult};
pub use transport::{HttpTransport, ReqwestTransport, TransportReply};
