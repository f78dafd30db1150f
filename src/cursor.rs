//! Caret positions across edits.
//!
//! When text changes underneath a caret, the caret has to move with the text
//! around it:
//!
//! - an insertion strictly before the caret pushes it right by the inserted
//!   length; an insertion at or after the caret leaves it alone, so the caret
//!   ends up just before the new text;
//! - a removal strictly before the caret pulls it left, but never past the
//!   start of the removed span.

/// Caret offset after `length` chars were inserted at `position`.
#[must_use]
pub fn transform_for_insert(position: usize, length: usize, caret: usize) -> usize {
    if position < caret {
        caret.saturating_add(length)
    } else {
        caret
    }
}

/// Caret offset after `length` chars were removed at `position`.
#[must_use]
pub fn transform_for_remove(position: usize, length: usize, caret: usize) -> usize {
    if position < caret {
        caret - length.min(caret - position)
    } else {
        caret
    }
}

/// A surface's selection range.
///
/// Either end may be unset, meaning the surface has no usable caret there.
/// Unset ends pass through every transform untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Selection start in chars.
    pub start: Option<usize>,
    /// Selection end in chars.
    pub end: Option<usize>,
}

impl Selection {
    /// Create a selection from `start` to `end`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Create a collapsed selection (a plain caret).
    #[must_use]
    pub fn caret(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// A selection with neither end set.
    #[must_use]
    pub fn unset() -> Self {
        Self::default()
    }

    /// Check if neither end is set.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Check if both ends are set and equal.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.start.is_some() && self.start == self.end
    }

    /// Both ends moved across an insertion.
    #[must_use]
    pub fn transform_insert(self, position: usize, length: usize) -> Self {
        Self {
            start: self
                .start
                .map(|offset| transform_for_insert(position, length, offset)),
            end: self
                .end
                .map(|offset| transform_for_insert(position, length, offset)),
        }
    }

    /// Both ends moved across a removal.
    #[must_use]
    pub fn transform_remove(self, position: usize, length: usize) -> Self {
        Self {
            start: self
                .start
                .map(|offset| transform_for_remove(position, length, offset)),
            end: self
                .end
                .map(|offset| transform_for_remove(position, length, offset)),
        }
    }
}
