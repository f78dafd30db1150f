//! Headless in-memory surface.

use std::borrow::Cow;

use super::TextSurface;
use crate::cursor::Selection;

/// A [`TextSurface`] that lives entirely in memory.
///
/// Useful for headless hosts and tests. It can mimic two behaviours of real
/// text widgets: reporting newlines as `\r\n`, and jumping back to the top
/// when its value is replaced.
///
/// The selection is never clamped when the text changes; whatever was last
/// set is reported back.
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    text: String,
    selection: Selection,
    scroll_top: u32,
    crlf_newlines: bool,
    scroll_reset_on_write: bool,
    writes: usize,
}

impl MemorySurface {
    /// Create an empty surface with a caret at 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            selection: Selection::caret(0),
            ..Self::default()
        }
    }

    /// Create a surface showing `text` with a caret at 0.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::new()
        }
    }

    /// Report newlines as `\r\n`.
    #[must_use]
    pub fn with_crlf_newlines(mut self) -> Self {
        self.crlf_newlines = true;
        self
    }

    /// Reset the scroll offset to 0 whenever the value is written.
    #[must_use]
    pub fn with_scroll_reset_on_write(mut self) -> Self {
        self.scroll_reset_on_write = true;
        self
    }

    /// Number of times [`TextSurface::set_value`] was called.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Text as stored, without newline presentation applied.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text as if the user typed it, without counting a write.
    ///
    /// The caret moves to `caret`.
    pub fn type_text(&mut self, text: &str, caret: usize) {
        self.text = text.to_string();
        self.selection = Selection::caret(caret);
    }
}

impl TextSurface for MemorySurface {
    fn value(&self) -> Cow<'_, str> {
        if self.crlf_newlines {
            Cow::Owned(super::normalize_line_endings(&self.text).replace('\n', "\r\n"))
        } else {
            Cow::Borrowed(&self.text)
        }
    }

    fn set_value(&mut self, value: &str) {
        value.clone_into(&mut self.text);
        self.writes += 1;
        if self.scroll_reset_on_write {
            self.scroll_top = 0;
        }
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    fn scroll_top(&self) -> u32 {
        self.scroll_top
    }

    fn set_scroll_top(&mut self, offset: u32) {
        self.scroll_top = offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_surface_defaults() {
        let surface = MemorySurface::new();
        assert_eq!(surface.value(), "");
        assert_eq!(surface.selection(), Selection::caret(0));
        assert_eq!(surface.scroll_top(), 0);
        assert_eq!(surface.writes(), 0);
    }

    #[test]
    fn test_memory_surface_counts_writes() {
        let mut surface = MemorySurface::with_text("a");
        surface.set_value("b");
        surface.set_value("c");
        assert_eq!(surface.writes(), 2);
        assert_eq!(surface.text(), "c");

        surface.type_text("cd", 2);
        assert_eq!(surface.writes(), 2);
        assert_eq!(surface.selection(), Selection::caret(2));
    }

    #[test]
    fn test_memory_surface_crlf_presentation() {
        let surface = MemorySurface::with_text("x\n\ny").with_crlf_newlines();
        assert_eq!(surface.value(), "x\r\n\r\ny");
        assert_eq!(surface.text(), "x\n\ny");

        let mixed = MemorySurface::with_text("a\r\nb\nc").with_crlf_newlines();
        assert_eq!(mixed.value(), "a\r\nb\r\nc");
    }

    #[test]
    fn test_memory_surface_scroll_reset() {
        let mut surface = MemorySurface::with_text("a").with_scroll_reset_on_write();
        surface.set_scroll_top(40);
        surface.set_value("b");
        assert_eq!(surface.scroll_top(), 0);

        let mut steady = MemorySurface::with_text("a");
        steady.set_scroll_top(40);
        steady.set_value("b");
        assert_eq!(steady.scroll_top(), 40);
    }

    #[test]
    fn test_selection_is_not_clamped() {
        let mut surface = MemorySurface::with_text("yzx");
        surface.set_selection(Selection::caret(3));
        surface.set_value("x");
        assert_eq!(surface.selection(), Selection::caret(3));
    }
}
