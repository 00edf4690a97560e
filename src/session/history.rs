//! Bounded, most-recent-first search history.
//!
//! Two lists with the same recency semantics but different identity rules:
//! the plain history dedups on the exact display string, recent searches
//! dedup on the (artist, title) pair. Both are capped - inserting into a
//! full list evicts the oldest entry.

use crate::lyrics::domain::RecentSearch;

/// Maximum entries either list will hold
pub const HISTORY_LIMIT: usize = 10;

/// Display strings of prior queries, most recent first.
#[derive(Debug, Default)]
pub struct SearchHistory {
    entries: Vec<String>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a query. A duplicate moves to the front instead of creating
    /// a second entry; the oldest entry is evicted past the cap.
    pub fn record(&mut self, display: impl Into<String>) {
        let display = display.into();
        self.entries.retain(|e| *e != display);
        self.entries.insert(0, display);
        self.entries.truncate(HISTORY_LIMIT);
    }

    /// Remove the entry at `index`. Out-of-range is a silent no-op.
    pub fn remove(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Structured recent searches, most recent first, deduplicated by pair.
#[derive(Debug, Default)]
pub struct RecentSearches {
    entries: Vec<RecentSearch>,
}

impl RecentSearches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful search. Same recency/dedup/cap semantics as
    /// [`SearchHistory`], keyed on the (artist, title) pair.
    pub fn record(&mut self, search: RecentSearch) {
        self.entries.retain(|e| !e.same_query(&search));
        self.entries.insert(0, search);
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn entries(&self) -> &[RecentSearch] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
