//! Rope-backed text model using the ropey crate.

use ropey::Rope;

use super::TextModel;
use crate::error::Result;

/// A standalone [`TextModel`] holding its text in a [`Rope`].
///
/// Positions are char indices. Out-of-range positions are clamped to the end
/// of the text rather than rejected.
#[derive(Clone, Debug, Default)]
pub struct RopeModel {
    rope: Rope,
}

impl RopeModel {
    /// Create an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a model holding `text`.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Get the number of characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get the number of lines.
    #[must_use]
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    /// Insert `text` at a char position, clamped to the end.
    pub fn insert(&mut self, char_idx: usize, text: &str) {
        let char_idx = char_idx.min(self.len_chars());
        self.rope.insert(char_idx, text);
    }

    /// Remove `len` chars starting at `char_idx`, clamped to the end.
    pub fn remove(&mut self, char_idx: usize, len: usize) {
        let total = self.len_chars();
        let start = char_idx.min(total);
        let end = start.saturating_add(len).min(total);
        if start < end {
            self.rope.remove(start..end);
        }
    }

    /// Replace the entire contents.
    pub fn replace(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    /// Convert to string.
    #[must_use]
    pub fn to_string(&self) -> String {
        self.rope.to_string()
    }

    /// Get access to the underlying rope.
    #[must_use]
    pub fn inner(&self) -> &Rope {
        &self.rope
    }
}

impl TextModel for RopeModel {
    fn get_text(&self) -> Result<String> {
        Ok(self.rope.to_string())
    }

    fn insert_text(&mut self, position: usize, text: &str) -> Result<()> {
        self.insert(position, text);
        Ok(())
    }

    fn remove_text(&mut self, position: usize, text: &str) -> Result<()> {
        self.remove(position, text.chars().count());
        Ok(())
    }
}

impl From<&str> for RopeModel {
    fn from(s: &str) -> Self {
        Self::with_text(s)
    }
}

impl From<String> for RopeModel {
    fn from(s: String) -> Self {
        Self::with_text(&s)
    }
}
