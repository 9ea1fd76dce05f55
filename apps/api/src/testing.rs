//! Test doubles for the inference boundary.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::llm_client::{CompletionBackend, CompletionRequest, LlmError};

enum Reply {
    Text(String),
    RateLimited,
}

/// In-process backend that records every request and answers with a fixed reply.
pub struct FakeBackend {
    reply: Reply,
    seen: Mutex<Vec<CompletionRequest>>,
}

impl FakeBackend {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Reply::Text(text.into()),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Always fails the way a rate-limited endpoint does.
    pub fn failing() -> Self {
        Self {
            reply: Reply::RateLimited,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.seen.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionBackend for FakeBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.seen.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::RateLimited => Err(LlmError::Api {
                status: 429,
                message: "Rate limit reached".to_string(),
            }),
        }
    }
}

/// A conforming `{"data": [...]}` payload with `count` bios of at least `min_chars` characters.
pub fn bios_json(count: usize, min_chars: usize) -> String {
    let data: Vec<_> = (0..count)
        .map(|i| {
            let head = format!("Bio {i}: builder of calm tools and long walks.");
            let pad = min_chars.saturating_sub(head.chars().count());
            json!({ "bio": format!("{head}{}", " ok".repeat(pad.div_ceil(3))) })
        })
        .collect();
    json!({ "data": data }).to_string()
}
