//! Trait definitions for external API clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! can substitute mock implementations.

use async_trait::async_trait;

use super::domain::LyricsError;

/// Trait for lyric text lookup.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait LyricsApi: Send + Sync {
    /// Fetch raw lyric text for a song.
    async fn fetch_lyrics(&self, artist: &str, title: &str) -> Result<String, LyricsError>;
}

/// Trait for lyric translation.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait TranslationApi: Send + Sync {
    /// Translate lyric text into English with cultural context.
    async fn translate(&self, text: &str) -> Result<String, LyricsError>;
}

// Implement traits for real clients

#[async_trait]
impl LyricsApi for super::lyricsovh::LyricsClient {
    async fn fetch_lyrics(&self, artist: &str, title: &str) -> Result<String, LyricsError> {
        self.fetch_lyrics(artist, title).await
    }
}

#[async_trait]
impl TranslationApi for super::openai::TranslationClient {
    async fn translate(&self, text: &str) -> Result<String, LyricsError> {
        self.translate(text).await
    }
}
