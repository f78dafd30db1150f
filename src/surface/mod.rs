//! The editable input surface a binding reads from and writes to.
//!
//! A surface is the text box itself: it holds the text the user sees, a
//! selection, and a scroll offset. Hosts adapt their widget to
//! [`TextSurface`]; [`MemorySurface`] is a headless implementation.

mod memory;

pub use memory::MemorySurface;

use std::borrow::Cow;

use crate::cursor::Selection;

/// An editable text element.
pub trait TextSurface {
    /// Current text, exactly as the element reports it.
    ///
    /// Newlines may come back as `\r\n`; the binding normalizes on read.
    fn value(&self) -> Cow<'_, str>;

    /// Replace the displayed text.
    ///
    /// The binding passes the model's `\n`-only text through unchanged.
    fn set_value(&mut self, value: &str);

    /// Current selection range.
    fn selection(&self) -> Selection;

    /// Set the selection range, both ends at once.
    fn set_selection(&mut self, selection: Selection);

    /// Current scroll offset.
    fn scroll_top(&self) -> u32;

    /// Set the scroll offset.
    fn set_scroll_top(&mut self, offset: u32);
}

impl<S: TextSurface + ?Sized> TextSurface for &mut S {
    fn value(&self) -> Cow<'_, str> {
        (**self).value()
    }

    fn set_value(&mut self, value: &str) {
        (**self).set_value(value);
    }

    fn selection(&self) -> Selection {
        (**self).selection()
    }

    fn set_selection(&mut self, selection: Selection) {
        (**self).set_selection(selection);
    }

    fn scroll_top(&self) -> u32 {
        (**self).scroll_top()
    }

    fn set_scroll_top(&mut self, offset: u32) {
        (**self).set_scroll_top(offset);
    }
}

/// Replace every `\r\n` with `\n`.
///
/// Lone `\r` characters are left alone. Borrows when there is nothing to
/// replace.
#[must_use]
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}
