//! Chat-completion wire structures.
//!
//! Contains the request/response structures for the OpenAI-compatible
//! `/chat/completions` endpoint, plus construction of the fixed
//! calculator prompt. Deserialization is tolerant: a missing level in the
//! reply envelope becomes an absent field, never a panic; the client turns
//! absence into a content-missing error.

use serde::{Deserialize, Serialize};

/// Fixed system instruction making the model behave as a calculator.
pub const SYSTEM_PROMPT: &str =
    "You are a calculator. Reply with only the numeric result, nothing else.";

/// Chat message structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// Create a system-role message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat completion request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Build the two-message summation request.
    ///
    /// `a` and `b` are substituted with standard decimal formatting, so
    /// integral values render without a fractional part (`2`, not `2.0`).
    pub fn sum_prompt(model: impl Into<String>, a: f64, b: f64) -> Self {
        Self {
            model: model.into(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(format!("What is {a} + {b}?")),
            ],
        }
    }
}

/// Chat completion response envelope
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// Choice in a chat completion response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: Option<ChatReplyMessage>,
}

/// Message in a chat completion response choice
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChatReplyMessage {
    #[serde(default)]
    pub content: Option<String>,
}
