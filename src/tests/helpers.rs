//! Test helper utilities for llm-sum tests
//!
//! This module provides a recording fake transport and response fixtures
//! shared across test modules.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - helpers are used across different test files
#![allow(dead_code)]

use crate::error::{SumError, SumResult};
use crate::protocol::ChatRequest;
use crate::transport::{HttpTransport, TransportReply};
use async_trait::async_trait;
use std::sync::Mutex;

/// One outbound request as the fake transport observed it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub api_key: String,
    pub request: ChatRequest,
}

/// What the fake transport should answer with.
#[derive(Debug)]
enum ScriptedReply {
    Reply {
        status: u16,
        status_text: String,
        body: String,
    },
    ConnectionFailure,
}

/// Fake transport that records every request and answers from a script.
///
/// Replaces network access in unit tests; integration tests use wiremock
/// against the real transport instead.
#[derive(Debug)]
pub struct FakeTransport {
    reply: ScriptedReply,
    calls: Mutex<Vec<RecordedRequest>>,
}

impl FakeTransport {
    /// Answer 200 OK with a well-formed envelope carrying `content`.
    pub fn with_content(content: &str) -> Self {
        Self::with_body(&chat_body(content))
    }

    /// Answer 200 OK with an arbitrary body.
    pub fn with_body(body: &str) -> Self {
        Self::with_status(200, "OK", body)
    }

    /// Answer an arbitrary status line and body.
    pub fn with_status(status: u16, status_text: &str, body: &str) -> Self {
        Self {
            reply: ScriptedReply::Reply {
                status,
                status_text: status_text.to_string(),
                body: body.to_string(),
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fail every request at the connection level.
    pub fn failing() -> Self {
        Self {
            reply: ScriptedReply::ConnectionFailure,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Number of requests observed so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The most recent request, if any was made.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn send_chat(
        &self,
        url: &str,
        api_key: &str,
        request: &ChatRequest,
    ) -> SumResult<TransportReply> {
        self.calls.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            api_key: api_key.to_string(),
            request: request.clone(),
        });

        match &self.reply {
            ScriptedReply::Reply {
                status,
                status_text,
                body,
            } => Ok(TransportReply {
                status: *status,
                status_text: status_text.clone(),
                body: body.clone(),
            }),
            ScriptedReply::ConnectionFailure => {
                Err(SumError::request_failed("connection refused", None))
            }
        }
    }
}

/// Serialize a well-formed chat-completion envelope carrying `content`.
pub fn chat_body(content: &str) -> String {
    serde_json::json!({
        "choices": [{
            "message": {
                "role": "assistant",
                "content": content
            },
            "finish_reason": "stop"
        }]
    })
    .to_string()
}
