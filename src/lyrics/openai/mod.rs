//! OpenAI completion API integration
//!
//! Translates selected lyric lines via a chat completion endpoint.
//! Requires an API key (bearer token).

pub mod dto;
mod client;

pub use client::TranslationClient;
