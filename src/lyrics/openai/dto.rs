//! OpenAI completion API Data Transfer Objects
//!
//! These types match EXACTLY what the completion API accepts and returns.
//! DO NOT use these types outside the openai module.
//!
//! The service has two response generations: the chat shape puts the output
//! in `choices[0].message.content`, the legacy completions shape in
//! `choices[0].text`. We accept either so a legacy-configured endpoint still
//! works.

use serde::{Deserialize, Serialize};

/// Chat completion request body
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

/// One message in a chat conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "system", "user" or "assistant"
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Completion response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// One completion choice, in either response generation
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// Chat shape
    pub message: Option<ChatMessage>,
    /// Legacy completions shape
    pub text: Option<String>,
}

impl CompletionResponse {
    /// Extract the first choice's output, whichever shape it arrived in.
    pub fn first_content(&self) -> Option<&str> {
        let choice = self.choices.first()?;
        if let Some(ref message) = choice.message {
            return Some(&message.content);
        }
        choice.text.as_deref()
    }
}

/// Error response from the completion API
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
