//! Search session - the state machine behind one lyric search screen.
//!
//! Owns the current lyrics/translation/error/loading state, the bounded
//! history lists, and the validation gates in front of both network clients.
//!
//! # Single-writer discipline
//!
//! All state mutation goes through `&mut self`, so ownership enforces one
//! writer. For presentation layers that spawn their requests instead of
//! awaiting inline, the request flow is split into `begin_*` / `settle_*`
//! phases: `begin_*` hands back a ticket carrying a monotonically increasing
//! sequence number, and `settle_*` discards any ticket older than the last
//! one issued. A stale response can therefore never overwrite fresher state.
//!
//! # State machines
//!
//! Search: `Idle -> Loading -> Settled(lyrics) | Settled(error)`
//! Translation: independent, same shape. Both are driven sequentially; the
//! convenience `async fn` wrappers hold the `&mut` borrow across the await,
//! so overlapping requests cannot originate from a single session handle.

pub mod history;
pub mod query;
pub mod selection;

use tracing::debug;

use crate::lyrics::domain::{LyricsError, RecentSearch, SearchQuery};
use crate::lyrics::traits::{LyricsApi, TranslationApi};
use history::{RecentSearches, SearchHistory};
use selection::{LineSelection, REQUIRED_LINES};

/// Externally observable session state.
///
/// The settled display modes are mutually exclusive: a settled request
/// leaves either content or an error message, never both.
#[derive(Debug, Default)]
pub struct SessionState {
    /// Current lyric text (newline-delimited)
    pub lyrics: String,
    /// Current translation text
    pub translation: String,
    /// True for the duration of exactly one outstanding request
    pub is_loading: bool,
    /// User-facing message from the last failed request or validation
    pub error_message: Option<String>,
}

/// What the presentation layer should be showing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Idle,
    Loading,
    Error,
    Translation,
    Lyrics,
}

impl SessionState {
    /// Derive the current display mode. Loading wins over everything;
    /// a fresh translation is shown in preference to the lyrics under it.
    pub fn display_mode(&self) -> DisplayMode {
        if self.is_loading {
            DisplayMode::Loading
        } else if self.error_message.is_some() {
            DisplayMode::Error
        } else if !self.translation.is_empty() {
            DisplayMode::Translation
        } else if !self.lyrics.is_empty() {
            DisplayMode::Lyrics
        } else {
            DisplayMode::Idle
        }
    }
}

/// Ticket for an in-flight lyric search. Carries the query so settling can
/// record the recent-search entry without re-deriving it.
#[derive(Debug, Clone)]
pub struct SearchTicket {
    seq: u64,
    query: SearchQuery,
}

impl SearchTicket {
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }
}

/// Ticket for an in-flight translation request.
#[derive(Debug, Clone, Copy)]
pub struct TranslationTicket {
    seq: u64,
}

/// The session owning one search screen's state.
pub struct SearchSession<L, T> {
    lyrics_api: L,
    translation_api: T,
    state: SessionState,
    history: SearchHistory,
    recent: RecentSearches,
    search_seq: u64,
    translation_seq: u64,
    next_recent_id: u64,
}

impl<L: LyricsApi, T: TranslationApi> SearchSession<L, T> {
    /// Create a session over the given clients. Clients arrive fully
    /// configured - the session never reads ambient configuration.
    pub fn new(lyrics_api: L, translation_api: T) -> Self {
        Self {
            lyrics_api,
            translation_api,
            state: SessionState::default(),
            history: SearchHistory::new(),
            recent: RecentSearches::new(),
            search_seq: 0,
            translation_seq: 0,
            next_recent_id: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    pub fn recent_searches(&self) -> &[RecentSearch] {
        self.recent.entries()
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Search by explicit artist/title fields.
    ///
    /// Empty fields are rejected with a validation error before any network
    /// traffic. Otherwise records history, fetches lyrics, and settles.
    pub async fn search(&mut self, artist: &str, title: &str) {
        let Some(query) = SearchQuery::new(artist, title) else {
            self.fail_validation("Please enter both an artist and a song title.");
            return;
        };
        self.run_search(query).await;
    }

    /// Search from a raw free-text query ("Burna Boy - Last Last").
    pub async fn search_free_text(&mut self, raw: &str) {
        let Some(query) = query::parse_free_text(raw) else {
            self.fail_validation("Please enter both an artist and a song title.");
            return;
        };
        self.run_search(query).await;
    }

    async fn run_search(&mut self, query: SearchQuery) {
        let ticket = self.begin_search(query);
        let result = self
            .lyrics_api
            .fetch_lyrics(&ticket.query.artist, &ticket.query.title)
            .await;
        self.settle_search(ticket, result);
    }

    /// Start a search: record it in history, clear the prior error, enter
    /// loading, and issue a ticket for the response.
    pub fn begin_search(&mut self, query: SearchQuery) -> SearchTicket {
        self.history.record(query.display());
        self.state.is_loading = true;
        self.state.error_message = None;

        self.search_seq += 1;
        SearchTicket {
            seq: self.search_seq,
            query,
        }
    }

    /// Settle a search with its result.
    ///
    /// A ticket older than the last issued search is stale; its result is
    /// discarded so it cannot overwrite fresher state.
    pub fn settle_search(&mut self, ticket: SearchTicket, result: Result<String, LyricsError>) {
        if ticket.seq != self.search_seq {
            debug!(
                stale = ticket.seq,
                current = self.search_seq,
                "discarding stale search response"
            );
            return;
        }

        self.state.is_loading = false;
        match result {
            Ok(lyrics) => {
                self.state.lyrics = lyrics;
                self.state.translation.clear();
                self.state.error_message = None;
                self.record_recent(&ticket.query);
            }
            Err(err) => {
                // Never leave stale content behind an error view
                self.state.lyrics.clear();
                self.state.translation.clear();
                self.state.error_message = Some(err.user_message());
            }
        }
    }

    fn record_recent(&mut self, query: &SearchQuery) {
        self.next_recent_id += 1;
        self.recent.record(RecentSearch {
            id: self.next_recent_id,
            artist: query.artist.clone(),
            title: query.title.clone(),
            searched_at: chrono::Utc::now().to_rfc3339(),
        });
    }

    // ------------------------------------------------------------------
    // Translation
    // ------------------------------------------------------------------

    /// Request a translation of the selected lines of the current lyrics.
    ///
    /// Rejected with a validation error unless exactly five lines are
    /// selected and all of them exist in the current lyric text.
    pub async fn request_translation(&mut self, selection: &LineSelection) {
        let text = match self.selected_text(selection) {
            Ok(text) => text,
            Err(err) => {
                self.fail_validation(err.user_message());
                return;
            }
        };

        let ticket = self.begin_translation();
        let result = self.translation_api.translate(&text).await;
        self.settle_translation(ticket, result);
    }

    /// Validate the selection against the current lyrics and extract the
    /// request payload. No state is mutated.
    pub fn selected_text(&self, selection: &LineSelection) -> Result<String, LyricsError> {
        if !selection.is_complete() {
            return Err(LyricsError::validation(format!(
                "Please select {REQUIRED_LINES} lines to get the translation."
            )));
        }
        selection.extract(&self.state.lyrics)
    }

    /// Start a translation request and issue a ticket for the response.
    pub fn begin_translation(&mut self) -> TranslationTicket {
        self.state.is_loading = true;
        self.state.error_message = None;

        self.translation_seq += 1;
        TranslationTicket {
            seq: self.translation_seq,
        }
    }

    /// Settle a translation with its result. Stale tickets are discarded.
    ///
    /// A failed translation keeps the lyrics - the user can adjust the
    /// selection and retry against the same text.
    pub fn settle_translation(
        &mut self,
        ticket: TranslationTicket,
        result: Result<String, LyricsError>,
    ) {
        if ticket.seq != self.translation_seq {
            debug!(
                stale = ticket.seq,
                current = self.translation_seq,
                "discarding stale translation response"
            );
            return;
        }

        self.state.is_loading = false;
        match result {
            Ok(translation) => {
                self.state.translation = translation;
                self.state.error_message = None;
            }
            Err(err) => {
                self.state.translation.clear();
                self.state.error_message = Some(err.user_message());
            }
        }
    }

    /// Dismiss the translation panel, returning to the lyrics view.
    /// Clearing the line selection is the caller's concern.
    pub fn dismiss_translation(&mut self) {
        self.state.translation.clear();
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    /// Remove the history entry at `index`. Out-of-range is a silent no-op.
    pub fn delete_history_entry(&mut self, index: usize) {
        self.history.remove(index);
    }

    fn fail_validation(&mut self, message: impl Into<String>) {
        self.state.is_loading = false;
        self.state.error_message = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyrics::traits::mocks::{MockLyrics, MockTranslation};

    fn nine_lines() -> String {
        (0..9).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n")
    }

    fn session_with_lyrics(
        lyrics: &str,
    ) -> SearchSession<MockLyrics, MockTranslation> {
        SearchSession::new(
            MockLyrics::with_lyrics(lyrics),
            MockTranslation::with_translation("English translation"),
        )
    }

    #[tokio::test]
    async fn test_search_success_sets_lyrics_and_history() {
        let mut session = session_with_lyrics("Last last na everybody go chop breakfast");
        session.search("Burna Boy", "Last Last").await;

        let state = session.state();
        assert!(!state.is_loading);
        assert!(state.error_message.is_none());
        assert!(state.lyrics.contains("breakfast"));
        assert_eq!(session.history(), &["Burna Boy - Last Last"]);
        assert_eq!(session.recent_searches().len(), 1);
        assert_eq!(session.recent_searches()[0].artist, "Burna Boy");
        assert_eq!(state.display_mode(), DisplayMode::Lyrics);
    }

    #[tokio::test]
    async fn test_search_empty_fields_never_hits_network() {
        let mut session = session_with_lyrics("whatever");

        session.search("", "Last Last").await;
        assert!(session.state().error_message.is_some());

        session.search("Burna Boy", "   ").await;
        assert!(session.state().error_message.is_some());

        assert_eq!(session.lyrics_api.call_count(), 0);
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn test_search_failure_maps_message_and_clears_lyrics() {
        let mut session = session_with_lyrics(&nine_lines());
        session.search("Burna Boy", "Last Last").await;
        assert!(!session.state().lyrics.is_empty());

        // Second search fails; prior lyrics must not survive next to the error
        session.lyrics_api = MockLyrics::with_error(LyricsError::RequestFailed("dns".into()));
        session.search("Burna Boy", "Lsat Lsat").await;

        let state = session.state();
        assert!(state.lyrics.is_empty());
        assert_eq!(
            state.error_message.as_deref(),
            Some("Song not found. Check the spelling and try again.")
        );
        assert_eq!(state.display_mode(), DisplayMode::Error);
    }

    #[tokio::test]
    async fn test_search_decoding_failure_surfaces_without_panic() {
        let mut session = SearchSession::new(
            MockLyrics::with_error(LyricsError::DecodingFailed("missing field `lyrics`".into())),
            MockTranslation::with_translation("x"),
        );
        session.search("Burna Boy", "Last Last").await;
        assert!(session
            .state()
            .error_message
            .as_deref()
            .unwrap()
            .contains("response"));
    }

    #[tokio::test]
    async fn test_new_search_clears_prior_error() {
        let mut session = SearchSession::new(
            MockLyrics::with_error(LyricsError::RequestFailed("down".into())),
            MockTranslation::with_translation("x"),
        );
        session.search("Rema", "Calm Down").await;
        assert!(session.state().error_message.is_some());

        session.lyrics_api = MockLyrics::with_lyrics("Baby calm down, calm down");
        session.search("Rema", "Calm Down").await;
        assert!(session.state().error_message.is_none());
        assert!(session.state().lyrics.contains("calm down"));
    }

    #[tokio::test]
    async fn test_free_text_search_uses_canonical_parse() {
        let mut session = session_with_lyrics("some lyrics");
        session.search_free_text("Burna Boy - Last Last").await;
        assert_eq!(session.history(), &["Burna Boy - Last Last"]);
        assert_eq!(session.recent_searches()[0].title, "Last Last");
    }

    #[tokio::test]
    async fn test_free_text_single_word_is_validation_error() {
        let mut session = session_with_lyrics("some lyrics");
        session.search_free_text("Burna").await;
        assert!(session.state().error_message.is_some());
        assert_eq!(session.lyrics_api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_translation_requires_exactly_five_lines() {
        let mut session = session_with_lyrics(&nine_lines());
        session.search("a", "b").await;

        for count in [0usize, 3, 4] {
            let selection = LineSelection::from_indices(0..count);
            session.request_translation(&selection).await;
            assert_eq!(session.translation_api.call_count(), 0);
            assert_eq!(
                session.state().error_message.as_deref(),
                Some("Please select 5 lines to get the translation.")
            );
        }
    }

    #[tokio::test]
    async fn test_translation_payload_is_ascending_newline_joined() {
        let mut session = session_with_lyrics(&nine_lines());
        session.search("a", "b").await;

        let selection = LineSelection::from_indices([0, 2, 4, 6, 8]);
        session.request_translation(&selection).await;

        assert_eq!(
            session.translation_api.last_input().as_deref(),
            Some("line 0\nline 2\nline 4\nline 6\nline 8")
        );
        assert_eq!(session.state().translation, "English translation");
        assert_eq!(session.state().display_mode(), DisplayMode::Translation);
    }

    #[tokio::test]
    async fn test_translation_out_of_range_selection_is_validation_error() {
        let mut session = session_with_lyrics("only\ntwo");
        session.search("a", "b").await;

        let selection = LineSelection::from_indices([0, 1, 2, 3, 4]);
        session.request_translation(&selection).await;

        assert_eq!(session.translation_api.call_count(), 0);
        assert!(session
            .state()
            .error_message
            .as_deref()
            .unwrap()
            .contains("out of range"));
    }

    #[tokio::test]
    async fn test_translation_error_passes_detail_through() {
        let mut session = SearchSession::new(
            MockLyrics::with_lyrics(&nine_lines()),
            MockTranslation::with_error(LyricsError::Translation("Client error: 404".into())),
        );
        session.search("a", "b").await;

        let selection = LineSelection::from_indices([0, 1, 2, 3, 4]);
        session.request_translation(&selection).await;

        let message = session.state().error_message.clone().unwrap();
        assert!(message.contains("404"));
        // Lyrics survive a failed translation
        assert!(!session.state().lyrics.is_empty());
    }

    #[tokio::test]
    async fn test_dismiss_translation_returns_to_lyrics() {
        let mut session = session_with_lyrics(&nine_lines());
        session.search("a", "b").await;
        let selection = LineSelection::from_indices([0, 1, 2, 3, 4]);
        session.request_translation(&selection).await;
        assert_eq!(session.state().display_mode(), DisplayMode::Translation);

        session.dismiss_translation();
        assert_eq!(session.state().display_mode(), DisplayMode::Lyrics);
    }

    #[test]
    fn test_stale_search_response_is_discarded() {
        let mut session = session_with_lyrics("unused");

        let old = session.begin_search(SearchQuery::new("Wizkid", "Essence").unwrap());
        let new = session.begin_search(SearchQuery::new("Burna Boy", "Last Last").unwrap());

        // The older response arrives late - it must not overwrite anything
        session.settle_search(old, Ok("stale lyrics".into()));
        assert!(session.state().lyrics.is_empty());
        assert!(session.state().is_loading);
        assert!(session.recent_searches().is_empty());

        session.settle_search(new, Ok("fresh lyrics".into()));
        assert_eq!(session.state().lyrics, "fresh lyrics");
        assert!(!session.state().is_loading);
        assert_eq!(session.recent_searches()[0].artist, "Burna Boy");
    }

    #[test]
    fn test_stale_translation_response_is_discarded() {
        let mut session = session_with_lyrics("unused");

        let old = session.begin_translation();
        let new = session.begin_translation();

        session.settle_translation(old, Ok("stale".into()));
        assert!(session.state().translation.is_empty());

        session.settle_translation(new, Ok("fresh".into()));
        assert_eq!(session.state().translation, "fresh");
    }

    #[tokio::test]
    async fn test_history_cap_and_dedup_through_session() {
        let mut session = session_with_lyrics("text");
        for i in 0..12 {
            session.search(&format!("Artist {i}"), "Title").await;
        }
        assert_eq!(session.history().len(), 10);
        assert_eq!(session.recent_searches().len(), 10);

        session.search("Artist 11", "Title").await;
        assert_eq!(session.history().len(), 10);
        assert_eq!(session.history()[0], "Artist 11 - Title");
    }

    #[tokio::test]
    async fn test_delete_history_entry_bounds_checked() {
        let mut session = session_with_lyrics("text");
        session.search("Asake", "Joha").await;

        session.delete_history_entry(7); // no-op
        assert_eq!(session.history().len(), 1);
        session.delete_history_entry(0);
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn test_loading_flag_spans_exactly_one_request() {
        let mut session = session_with_lyrics("text");
        assert!(!session.state().is_loading);
        session.search("a", "b").await;
        assert!(!session.state().is_loading);

        let ticket = session.begin_search(SearchQuery::new("a", "b").unwrap());
        assert!(session.state().is_loading);
        session.settle_search(ticket, Err(LyricsError::InvalidResponse(503)));
        assert!(!session.state().is_loading);
    }
}
