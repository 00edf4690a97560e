//! lyrics.ovh API integration
//!
//! Looks up raw lyric text by artist and song title. No API key required.

pub mod dto;
mod client;

pub use client::LyricsClient;
