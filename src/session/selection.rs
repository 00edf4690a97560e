//! Line selection for translation requests.
//!
//! The translation flow is only valid for exactly five selected lines.
//! Toggling refuses a sixth selection rather than silently dropping one,
//! matching the tap behavior the selection drives.

use std::collections::BTreeSet;

use crate::lyrics::domain::LyricsError;

/// Number of lines a translation request requires
pub const REQUIRED_LINES: usize = 5;

/// A set of selected lyric line indices, capped at [`REQUIRED_LINES`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSelection {
    indices: BTreeSet<usize>,
}

impl LineSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from explicit indices.
    ///
    /// Duplicates collapse; no cardinality check happens here - validation
    /// belongs to the translation request, which reports it as an error the
    /// user can read instead of a constructor panic.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
        }
    }

    /// Toggle a line. Deselecting always works; selecting is refused once
    /// the selection is full. Returns whether the index is now selected.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.indices.remove(&index) {
            return false;
        }
        if self.indices.len() < REQUIRED_LINES {
            self.indices.insert(index);
            return true;
        }
        false
    }

    /// Whether exactly the required number of lines is selected.
    pub fn is_complete(&self) -> bool {
        self.indices.len() == REQUIRED_LINES
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Clear the selection, e.g. after the translation panel is dismissed.
    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Extract the selected lines from lyric text, in ascending index order,
    /// joined by newline.
    ///
    /// An index past the end of the text is a validation error, not a panic -
    /// the selection can go stale if a new search replaced the lyrics.
    pub fn extract(&self, lyrics: &str) -> Result<String, LyricsError> {
        let lines: Vec<&str> = lyrics.lines().collect();

        let mut selected = Vec::with_capacity(self.indices.len());
        for &index in &self.indices {
            let line = lines.get(index).ok_or_else(|| {
                LyricsError::validation(format!(
                    "Selected line {} is out of range for the current lyrics",
                    index
                ))
            })?;
            selected.push(*line);
        }

        Ok(selected.join("\n"))
    }
}
