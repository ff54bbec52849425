//! Response parsing and validation for the chat-completion reply.
//!
//! Turns the raw response body into the single number the caller asked
//! for, with a distinct error for each way the reply can be unusable.

use crate::error::{SumError, SumResult};
use crate::logging::{log_debug, log_warn};
use crate::protocol::ChatResponse;

/// Response parser for chat-completion reply bodies
pub struct ResponseParser;

impl ResponseParser {
    /// Extract the first reply's text content from a response body.
    ///
    /// Only `choices[0].message.content` is consulted. Absence at any
    /// level - unparseable body, empty choices, missing message, missing
    /// or empty content - fails with a content-missing error, never a
    /// panic.
    pub fn extract_content(body: &str) -> SumResult<String> {
        let response: ChatResponse = serde_json::from_str(body).map_err(|e| {
            log_warn!(
                body_preview = body.chars().take(200).collect::<String>(),
                "Response body is not a chat-completion envelope"
            );
            SumError::content_missing(format!("response body is not valid JSON: {e}"))
        })?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
            .map(str::trim)
            .unwrap_or_default();

        if content.is_empty() {
            return Err(SumError::content_missing(
                "choices[0].message.content is absent or empty",
            ));
        }

        log_debug!(content_length = content.len(), "Extracted reply content");
        Ok(content.to_string())
    }

    /// Parse trimmed reply content as a floating-point decimal number.
    ///
    /// NaN is rejected like any other non-numeric reply. No rounding and
    /// no verification against the expected sum; the model's arithmetic
    /// is trusted as-is.
    pub fn parse_numeric(content: &str) -> SumResult<f64> {
        let value = content
            .parse::<f64>()
            .map_err(|_| SumError::non_numeric(content))?;

        if value.is_nan() {
            return Err(SumError::non_numeric(content));
        }

        Ok(value)
    }
}
