//! Lyric lookup and translation - the two external service integrations.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types and the error taxonomy
//! - **API DTOs** (`lyricsovh/dto.rs`, `openai/dto.rs`) - Exact API response shapes
//! - **Clients** - HTTP clients for the external APIs
//! - **Traits** (`traits.rs`) - Injection seams so the session can be tested
//!   against mocks
//!
//! This decoupling means:
//! 1. API changes don't ripple through our codebase
//! 2. We can test API contracts independently
//! 3. We can swap providers without changing the session logic

pub mod domain;
pub mod lyricsovh;
pub mod openai;
pub mod traits;

pub use domain::{LyricsError, RecentSearch, SearchQuery};
pub use lyricsovh::LyricsClient;
pub use openai::TranslationClient;
pub use traits::{LyricsApi, TranslationApi};
