//! OpenAI completion HTTP client
//!
//! Requests an English translation of selected Afrobeats lyric lines, with
//! brief cultural context. One synchronous round trip per call - no retry,
//! no streaming.
//!
//! Authorization is a bearer token. Status handling is deliberately fine
//! grained: 4xx/5xx become `Translation` errors carrying the status so the
//! user message can pass the detail through.

use super::dto;
use crate::lyrics::domain::LyricsError;

/// Prompt priming the model for this genre.
const SYSTEM_PROMPT: &str = "You are an expert translator for Afrobeats lyrics. \
You translate Nigerian Pidgin, Yoruba, Igbo and other West African languages \
into natural English.";

/// Translation client for an OpenAI-compatible completion endpoint
pub struct TranslationClient {
    http_client: reqwest::Client,
    completion_url: String,
    api_key: String,
    model: String,
}

impl TranslationClient {
    /// Create a new client. The API key is passed in explicitly - clients
    /// never read ambient configuration.
    pub fn new(
        completion_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            completion_url: completion_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Create a client for testing with custom completion URL
    #[cfg(test)]
    pub fn with_completion_url(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::new(url, api_key, "test-model")
    }

    /// Translate the given lyric text into concise English with brief
    /// cultural context.
    pub async fn translate(&self, text: &str) -> Result<String, LyricsError> {
        if reqwest::Url::parse(&self.completion_url).is_err() {
            return Err(LyricsError::InvalidUrl);
        }

        let request = build_request(&self.model, text);

        let response = self
            .http_client
            .post(&self.completion_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| LyricsError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 200 {
            return parse_translation(response).await;
        }

        // Pull the API's own message when it sends one
        let api_message = response
            .json::<dto::ApiError>()
            .await
            .ok()
            .map(|e| e.error.message);

        let err = error_for_status(status, api_message.as_deref());
        tracing::warn!(status, error = %err, "translation request failed");
        Err(err)
    }
}

/// Map a non-200 completion status to the error taxonomy.
///
/// 4xx/5xx pass the status through as a `Translation` detail so the user
/// message can surface it; anything else is an unexpected response.
fn error_for_status(status: u16, api_message: Option<&str>) -> LyricsError {
    match status {
        400..=499 => match api_message {
            Some(msg) => LyricsError::Translation(format!("Client error: {status} ({msg})")),
            None => LyricsError::Translation(format!("Client error: {status}")),
        },
        500..=599 => LyricsError::Translation(format!("Server error: {status}")),
        _ => LyricsError::InvalidResponse(status),
    }
}

/// Build the chat completion request body for a lyric translation.
fn build_request(model: &str, text: &str) -> dto::CompletionRequest {
    let user_prompt = format!(
        "Translate the following Afrobeats lyrics into concise, accurate English. \
         Provide brief but insightful cultural context where relevant:\n\n{text}"
    );

    dto::CompletionRequest {
        model: model.to_string(),
        messages: vec![
            dto::ChatMessage::system(SYSTEM_PROMPT),
            dto::ChatMessage::user(user_prompt),
        ],
        // Low temperature keeps translations stable across retries by the user
        temperature: 0.2,
        max_tokens: 300,
        top_p: 0.95,
        frequency_penalty: 0.1,
        presence_penalty: 0.1,
    }
}

/// Parse a 200 response into the translated text.
async fn parse_translation(response: reqwest::Response) -> Result<String, LyricsError> {
    let parsed = response
        .json::<dto::CompletionResponse>()
        .await
        .map_err(|e| LyricsError::DecodingFailed(e.to_string()))?;

    match parsed.first_content() {
        Some(content) => Ok(content.trim().to_string()),
        None => Err(LyricsError::Translation(
            "Response contained no translation text".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = TranslationClient::new(
            "https://api.openai.com/v1/chat/completions",
            "sk-test",
            "gpt-4o-mini",
        );
        assert_eq!(
            client.completion_url,
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(client.model, "gpt-4o-mini");
    }

    #[test]
    fn test_client_with_custom_url() {
        let client = TranslationClient::with_completion_url("http://localhost:8080/v1", "key");
        assert_eq!(client.completion_url, "http://localhost:8080/v1");
        assert_eq!(client.model, "test-model");
    }

    #[test]
    fn test_request_embeds_lyric_text() {
        let request = build_request("gpt-4o-mini", "Gbe body e\nJo jo jo");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert!(request.messages[0].content.contains("Afrobeats"));
        assert_eq!(request.messages[1].role, "user");
        assert!(request.messages[1].content.contains("Gbe body e\nJo jo jo"));
    }

    #[test]
    fn test_request_sampling_parameters() {
        let request = build_request("gpt-4o-mini", "text");
        assert_eq!(request.temperature, 0.2);
        assert_eq!(request.max_tokens, 300);
        assert_eq!(request.top_p, 0.95);
    }

    #[test]
    fn test_not_found_becomes_translation_error_with_status() {
        let err = error_for_status(404, None);
        match err {
            LyricsError::Translation(detail) => assert!(detail.contains("404")),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn test_server_error_becomes_translation_error_with_status() {
        let err = error_for_status(500, None);
        match err {
            LyricsError::Translation(detail) => assert!(detail.contains("500")),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn test_client_error_includes_api_message() {
        let err = error_for_status(401, Some("Incorrect API key provided"));
        match err {
            LyricsError::Translation(detail) => {
                assert!(detail.contains("401"));
                assert!(detail.contains("Incorrect API key"));
            }
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn test_unexpected_status_is_invalid_response() {
        assert!(matches!(
            error_for_status(301, None),
            LyricsError::InvalidResponse(301)
        ));
    }
}
