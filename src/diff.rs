//! Prefix/suffix text diffing.
//!
//! [`TextDiff::compute`] reduces a before/after pair of strings to the single
//! contiguous span that changed: the longest common prefix and the longest
//! common suffix are kept, and whatever lies between them is reported as one
//! removal and one insertion at the same position.
//!
//! When prefix and suffix compete for the same characters (for example `"xx"`
//! becoming `"xxx"`), the prefix wins, so the edit lands as far right as
//! possible.
//!
//! All positions and lengths count `char`s.
//!
//! # Examples
//!
//! ```
//! use text_diff_binding::{Edit, TextDiff};
//!
//! let diff = TextDiff::compute("xxq", "x12xq");
//! assert_eq!(diff.start, 1);
//! assert_eq!(diff.remove(), None);
//! assert_eq!(
//!     diff.insert(),
//!     Some(Edit::Insert { position: 1, text: "12".to_string() })
//! );
//! assert_eq!(diff.apply("xxq"), "x12xq");
//! ```

/// A single contiguous change to a text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edit {
    /// `text` is inserted so that it starts at `position`.
    Insert { position: usize, text: String },
    /// `text` is removed from `position` onwards.
    Remove { position: usize, text: String },
}

impl Edit {
    /// Char offset the edit applies at.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::Insert { position, .. } | Self::Remove { position, .. } => *position,
        }
    }

    /// Inserted or removed text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Insert { text, .. } | Self::Remove { text, .. } => text,
        }
    }

    /// Length of the edit in chars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text().chars().count()
    }

    /// Check if the edit carries no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// Check if this is an insertion.
    #[must_use]
    pub fn is_insert(&self) -> bool {
        matches!(self, Self::Insert { .. })
    }

    /// The edit that undoes this one.
    #[must_use]
    pub fn invert(&self) -> Self {
        match self {
            Self::Insert { position, text } => Self::Remove {
                position: *position,
                text: text.clone(),
            },
            Self::Remove { position, text } => Self::Insert {
                position: *position,
                text: text.clone(),
            },
        }
    }

    /// Apply the edit to `target` in place.
    ///
    /// Positions past the end are clamped to the end of `target`; a removal
    /// never reaches past the end of `target`.
    pub fn apply(&self, target: &mut String) {
        let start = char_to_byte(target, self.position());
        match self {
            Self::Insert { text, .. } => target.insert_str(start, text),
            Self::Remove { text, .. } => {
                let len = text.chars().count();
                let end = start + char_to_byte(&target[start..], len);
                target.replace_range(start..end, "");
            }
        }
    }
}

/// Result of diffing two strings.
///
/// `previous[..start]` and `current[..start]` are the shared prefix;
/// the last `end` chars of both are the shared suffix. `removed` is what sat
/// between them in `previous` and `inserted` is what sits between them in
/// `current`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextDiff {
    /// Length of the common prefix, and the position of both edits.
    pub start: usize,
    /// Length of the common suffix.
    pub end: usize,
    /// Text removed from the previous string.
    pub removed: String,
    /// Text inserted into the current string.
    pub inserted: String,
}

impl TextDiff {
    /// Compare two strings and find the changed span.
    #[must_use]
    pub fn compute(previous: &str, current: &str) -> Self {
        if previous == current {
            return Self {
                start: previous.chars().count(),
                ..Self::default()
            };
        }

        let mut start = 0;
        let mut prefix_bytes = 0;
        for (a, b) in previous.chars().zip(current.chars()) {
            if a != b {
                break;
            }
            start += 1;
            prefix_bytes += a.len_utf8();
        }

        // The suffix scan only sees what the prefix left over, so the two
        // can never overlap.
        let previous_rest = &previous[prefix_bytes..];
        let current_rest = &current[prefix_bytes..];
        let mut end = 0;
        let mut suffix_bytes = 0;
        for (a, b) in previous_rest.chars().rev().zip(current_rest.chars().rev()) {
            if a != b {
                break;
            }
            end += 1;
            suffix_bytes += a.len_utf8();
        }

        Self {
            start,
            end,
            removed: previous_rest[..previous_rest.len() - suffix_bytes].to_string(),
            inserted: current_rest[..current_rest.len() - suffix_bytes].to_string(),
        }
    }

    /// Check if the two strings were equal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.inserted.is_empty()
    }

    /// The removal, if anything was removed.
    #[must_use]
    pub fn remove(&self) -> Option<Edit> {
        (!self.removed.is_empty()).then(|| Edit::Remove {
            position: self.start,
            text: self.removed.clone(),
        })
    }

    /// The insertion, if anything was inserted.
    #[must_use]
    pub fn insert(&self) -> Option<Edit> {
        (!self.inserted.is_empty()).then(|| Edit::Insert {
            position: self.start,
            text: self.inserted.clone(),
        })
    }

    /// The removal followed by the insertion, skipping whichever is absent.
    pub fn edits(&self) -> impl Iterator<Item = Edit> {
        self.remove().into_iter().chain(self.insert())
    }

    /// The diff that turns `current` back into `previous`.
    #[must_use]
    pub fn invert(&self) -> Self {
        Self {
            start: self.start,
            end: self.end,
            removed: self.inserted.clone(),
            inserted: self.removed.clone(),
        }
    }

    /// Apply the diff to `previous`, producing `current`.
    #[must_use]
    pub fn apply(&self, previous: &str) -> String {
        let mut text = previous.to_string();
        for edit in self.edits() {
            edit.apply(&mut text);
        }
        text
    }
}

/// Compare two strings and find the changed span.
///
/// Shorthand for [`TextDiff::compute`].
#[must_use]
pub fn diff(previous: &str, current: &str) -> TextDiff {
    TextDiff::compute(previous, current)
}

/// Byte offset of the `char_idx`-th char, clamped to the end of `s`.
pub(crate) fn char_to_byte(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert(position: usize, text: &str) -> Edit {
        Edit::Insert {
            position,
            text: text.to_string(),
        }
    }

    fn remove(position: usize, text: &str) -> Edit {
        Edit::Remove {
            position,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_equal_strings_produce_no_edits() {
        for s in ["", "x", "hello world", "a\nb\n"] {
            let diff = TextDiff::compute(s, s);
            assert!(diff.is_empty(), "{s:?}");
            assert_eq!(diff.edits().count(), 0);
            assert_eq!(diff.start, s.chars().count());
            assert_eq!(diff.end, 0);
        }
    }

    #[test]
    fn test_insert_into_empty() {
        let diff = TextDiff::compute("", "x");
        assert_eq!(diff.insert(), Some(insert(0, "x")));
        assert_eq!(diff.remove(), None);
    }

    #[test]
    fn test_append() {
        let diff = TextDiff::compute("x", "xy");
        assert_eq!(diff.edits().collect::<Vec<_>>(), vec![insert(1, "y")]);
    }

    #[test]
    fn test_prepend() {
        let diff = TextDiff::compute("x", "yx");
        assert_eq!(diff.edits().collect::<Vec<_>>(), vec![insert(0, "y")]);
    }

    #[test]
    fn test_insert_within() {
        let diff = TextDiff::compute("xxq", "x12xq");
        assert_eq!(diff.edits().collect::<Vec<_>>(), vec![insert(1, "12")]);
        assert_eq!(diff.start, 1);
        assert_eq!(diff.end, 2);
    }

    #[test]
    fn test_remove_to_empty() {
        let diff = TextDiff::compute("x", "");
        assert_eq!(diff.edits().collect::<Vec<_>>(), vec![remove(0, "x")]);
    }

    #[test]
    fn test_remove_end_and_start() {
        assert_eq!(
            TextDiff::compute("xy", "x").edits().collect::<Vec<_>>(),
            vec![remove(1, "y")]
        );
        assert_eq!(
            TextDiff::compute("yx", "x").edits().collect::<Vec<_>>(),
            vec![remove(0, "y")]
        );
    }

    #[test]
    fn test_remove_within() {
        let diff = TextDiff::compute("x12xq", "xxq");
        assert_eq!(diff.edits().collect::<Vec<_>>(), vec![remove(1, "12")]);
    }

    #[test]
    fn test_replace_emits_remove_then_insert() {
        let diff = TextDiff::compute("hello world", "hello there");
        assert_eq!(
            diff.edits().collect::<Vec<_>>(),
            vec![remove(6, "world"), insert(6, "there")]
        );
    }

    #[test]
    fn test_ambiguous_run_prefers_prefix() {
        assert_eq!(TextDiff::compute("xx", "xxx").insert(), Some(insert(2, "x")));
        assert_eq!(TextDiff::compute("xxx", "xx").remove(), Some(remove(2, "x")));
        assert_eq!(
            TextDiff::compute("abab", "ababab").insert(),
            Some(insert(4, "ab"))
        );
    }

    #[test]
    fn test_multibyte_chars_are_not_split() {
        let diff = TextDiff::compute("héllo", "hällo");
        assert_eq!(diff.start, 1);
        assert_eq!(diff.end, 3);
        assert_eq!(diff.removed, "é");
        assert_eq!(diff.inserted, "ä");

        let diff = TextDiff::compute("a😀b", "a😀😀b");
        assert_eq!(diff.insert(), Some(insert(2, "😀")));
        assert_eq!(diff.apply("a😀b"), "a😀😀b");
    }

    #[test]
    fn test_apply_round_trip() {
        let pairs = [
            ("", "abc"),
            ("abc", ""),
            ("kitten", "sitting"),
            ("x\n\ny", "x\n\ny\n"),
            ("same", "same"),
        ];
        for (a, b) in pairs {
            assert_eq!(TextDiff::compute(a, b).apply(a), b, "{a:?} -> {b:?}");
        }
    }

    #[test]
    fn test_invert() {
        let diff = TextDiff::compute("kitten", "sitting");
        assert_eq!(diff.invert().apply("sitting"), "kitten");
        assert_eq!(insert(3, "ab").invert(), remove(3, "ab"));
    }

    #[test]
    fn test_edit_accessors() {
        let edit = insert(2, "ñx");
        assert_eq!(edit.position(), 2);
        assert_eq!(edit.text(), "ñx");
        assert_eq!(edit.len(), 2);
        assert!(edit.is_insert());
        assert!(!edit.is_empty());
        assert!(!remove(0, "a").is_insert());
    }

    #[test]
    fn test_edit_apply_clamps() {
        let mut text = String::from("ab");
        insert(10, "c").apply(&mut text);
        assert_eq!(text, "abc");
        remove(1, "bcdef").apply(&mut text);
        assert_eq!(text, "a");
    }

    #[test]
    fn test_diff_shorthand() {
        assert_eq!(diff("a", "b"), TextDiff::compute("a", "b"));
    }
}
