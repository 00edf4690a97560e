//! lyrics.ovh HTTP client
//!
//! Looks up lyric text by artist and title. The API is a plain GET with both
//! values as path segments, so each segment must be percent-encoded
//! individually (spaces, slashes, accents in artist names).
//!
//! The endpoint signals "unknown song" with a non-200 status rather than an
//! empty body, so lookup failures for misspelled songs surface as errors.

use super::dto;
use crate::lyrics::domain::LyricsError;

/// Lyrics lookup client
pub struct LyricsClient {
    http_client: reqwest::Client,
    base_url: String,
}

/// User agent sent with every request
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

impl LyricsClient {
    /// Create a new client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(base_url)
    }

    /// Fetch the raw lyric text for a song.
    ///
    /// Single attempt, no retry - a failed lookup surfaces immediately.
    pub async fn fetch_lyrics(&self, artist: &str, title: &str) -> Result<String, LyricsError> {
        let url = lookup_url(&self.base_url, artist, title);

        // Reject a malformed composition before it hits the transport.
        // Should not happen for well-formed inputs and a sane base URL.
        if reqwest::Url::parse(&url).is_err() {
            return Err(LyricsError::InvalidUrl);
        }

        tracing::debug!(%url, "fetching lyrics");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| LyricsError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            // The API reports "unknown song" as an error body; log it if present
            if let Ok(api_error) = response.json::<dto::ApiError>().await {
                tracing::warn!(
                    status = status.as_u16(),
                    error = %api_error.error,
                    "lyrics lookup failed"
                );
            } else {
                tracing::warn!(status = status.as_u16(), "lyrics lookup returned non-200");
            }
            return Err(LyricsError::InvalidResponse(status.as_u16()));
        }

        let parsed = response
            .json::<dto::LyricsResponse>()
            .await
            .map_err(|e| LyricsError::DecodingFailed(e.to_string()))?;

        Ok(parsed.lyrics)
    }
}

/// Compose the lookup URL with path-segment percent-encoding on both parts.
fn lookup_url(base_url: &str, artist: &str, title: &str) -> String {
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(artist),
        urlencoding::encode(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = LyricsClient::new("https://api.lyrics.ovh/v1");
        assert_eq!(client.base_url, "https://api.lyrics.ovh/v1");
    }

    #[test]
    fn test_client_with_custom_url() {
        let client = LyricsClient::with_base_url("http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_lookup_url_percent_encodes_segments() {
        let url = lookup_url("https://api.lyrics.ovh/v1", "Burna Boy", "Last Last");
        assert_eq!(url, "https://api.lyrics.ovh/v1/Burna%20Boy/Last%20Last");
    }

    #[test]
    fn test_lookup_url_encodes_reserved_characters() {
        // Slashes in a title must not create extra path segments
        let url = lookup_url("https://api.lyrics.ovh/v1", "AC/DC", "Back in Black");
        assert_eq!(
            url,
            "https://api.lyrics.ovh/v1/AC%2FDC/Back%20in%20Black"
        );
    }

    #[test]
    fn test_lookup_url_trims_trailing_slash() {
        let url = lookup_url("http://localhost:8080/", "a", "b");
        assert_eq!(url, "http://localhost:8080/a/b");
    }

    #[test]
    fn test_user_agent_format() {
        assert!(USER_AGENT.starts_with("lyriclens/"));
    }
}
