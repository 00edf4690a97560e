//! lyrics.ovh API Data Transfer Objects
//!
//! These types match EXACTLY what the lyrics API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the lyricsovh module.
//!
//! The API has a single success shape: a JSON object with one `lyrics`
//! string field, newline-delimited. Errors come back as `{ "error": ... }`.

use serde::{Deserialize, Serialize};

/// Successful lyric lookup response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LyricsResponse {
    /// Raw lyric text, lines separated by `\n` (sometimes `\r\n`)
    pub lyrics: String,
}

/// Error response from the lyrics API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
