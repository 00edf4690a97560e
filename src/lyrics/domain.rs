//! Internal domain models for lyric lookup and translation.
//!
//! These types are OUR types - they don't change when external APIs change.
//! All external API responses get converted into these types by the clients.

/// A normalized lyric search, the canonical unit of history bookkeeping.
///
/// Stored structured rather than as a formatted display string, so history
/// re-entry never has to re-parse what it previously rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Artist name, trimmed
    pub artist: String,
    /// Song title, trimmed
    pub title: String,
}

impl SearchQuery {
    /// Build a query from raw artist/title fields.
    ///
    /// Returns `None` if either field is empty after trimming - callers turn
    /// that into a validation error before any network traffic happens.
    pub fn new(artist: &str, title: &str) -> Option<Self> {
        let artist = artist.trim();
        let title = title.trim();
        if artist.is_empty() || title.is_empty() {
            return None;
        }
        Some(Self {
            artist: artist.to_string(),
            title: title.to_string(),
        })
    }

    /// Render the query for display in history rows.
    pub fn display(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }
}

/// A remembered successful search.
#[derive(Debug, Clone)]
pub struct RecentSearch {
    /// Opaque unique token, assigned by the owning session
    pub id: u64,
    /// Artist name
    pub artist: String,
    /// Song title
    pub title: String,
    /// When the search succeeded (RFC 3339)
    pub searched_at: String,
}

impl RecentSearch {
    /// Two recent searches are the "same" search if the pair matches,
    /// regardless of id or timestamp. Used for dedup on insert.
    pub fn same_query(&self, other: &Self) -> bool {
        self.artist == other.artist && self.title == other.title
    }
}

/// Errors that can occur during lyric lookup and translation
#[derive(Debug, Clone, thiserror::Error)]
pub enum LyricsError {
    #[error("Could not build a valid request URL")]
    InvalidUrl,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Unexpected response status: {0}")]
    InvalidResponse(u16),

    #[error("Failed to decode response: {0}")]
    DecodingFailed(String),

    #[error("Translation failed: {0}")]
    Translation(String),

    #[error("{0}")]
    Validation(String),
}

impl LyricsError {
    /// Map an error to the fixed user-facing message the session records.
    ///
    /// The lyrics lookup has no search endpoint, so a transport-level failure
    /// is most often a song that doesn't exist under the typed spelling.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidUrl => {
                "Invalid URL. Please check the configured endpoints.".to_string()
            }
            Self::RequestFailed(_) => {
                "Song not found. Check the spelling and try again.".to_string()
            }
            Self::InvalidResponse(_) => {
                "The server returned an unexpected response. Please try again.".to_string()
            }
            Self::DecodingFailed(_) => {
                "Could not read the server's response. Please try again later.".to_string()
            }
            Self::Translation(detail) => format!("Translation failed: {detail}"),
            Self::Validation(detail) => detail.clone(),
        }
    }

    /// Validation helper - these never reach the network layer.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
