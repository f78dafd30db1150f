//! Two-way synchronization between a text model and a surface.
//!
//! [`TextDiffBinding`] reacts to two kinds of notification:
//!
//! - **local input** ([`on_input`](TextDiffBinding::on_input)): the user
//!   changed the surface. The surface text is diffed against the model and
//!   the minimal remove/insert is sent to the model.
//! - **model changes** ([`on_insert`](TextDiffBinding::on_insert),
//!   [`on_remove`](TextDiffBinding::on_remove)): someone else changed the
//!   model. The caret is carried across the edit and the surface is
//!   refreshed without losing its scroll offset.
//!
//! Every handler runs to completion before returning, so the model and the
//! surface agree between calls.
//!
//! # Examples
//!
//! ```
//! use text_diff_binding::{MemorySurface, RopeModel, Selection, TextDiffBinding, TextSurface};
//!
//! let mut binding = TextDiffBinding::new(
//!     RopeModel::with_text("x"),
//!     MemorySurface::with_text("x"),
//! );
//!
//! // Local edit: the user typed "yz" in front of "x".
//! binding.surface_mut().type_text("yzx", 2);
//! binding.on_input().unwrap();
//! assert_eq!(binding.model().to_string(), "yzx");
//!
//! // Remote edit: two chars removed at the start of the model.
//! binding.model_mut().remove(0, 2);
//! binding.on_remove(0, 2).unwrap();
//! assert_eq!(binding.surface().value(), "x");
//! assert_eq!(binding.surface().selection(), Selection::caret(0));
//! ```

use std::fmt;

use crate::cursor::Selection;
use crate::diff::{Edit, TextDiff};
use crate::error::Result;
use serde_json::json;

use crate::event::{LogLevel, emit_event, emit_log};
use crate::model::TextModel;
use crate::surface::{TextSurface, normalize_line_endings};

/// Binding configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BindingOptions {
    /// Convert `\r\n` from the surface to `\n` before diffing or comparing.
    pub normalize_line_endings: bool,
    /// Restore the scroll offset if writing the surface moved it.
    pub preserve_scroll: bool,
}

impl Default for BindingOptions {
    fn default() -> Self {
        Self {
            normalize_line_endings: true,
            preserve_scroll: true,
        }
    }
}

type FocusProbe = Box<dyn Fn() -> bool>;

/// Keeps a [`TextSurface`] and a [`TextModel`] in sync.
///
/// The binding owns both collaborators; pass `&mut` references to keep
/// ownership elsewhere. It caches nothing between calls: the model's text is
/// read fresh on every notification.
///
/// Caret handling around model changes only happens while the surface has
/// focus, as reported by the focus probe (see
/// [`set_focus_probe`](Self::set_focus_probe)). Without a probe the surface
/// is assumed focused.
pub struct TextDiffBinding<M, S> {
    model: M,
    surface: S,
    focus: FocusProbe,
    options: BindingOptions,
}

impl<M: TextModel, S: TextSurface> TextDiffBinding<M, S> {
    /// Create a binding with default options.
    pub fn new(model: M, surface: S) -> Self {
        Self::with_options(model, surface, BindingOptions::default())
    }

    /// Create a binding with custom options.
    ///
    /// A model missing some operations is accepted; the missing ones fail
    /// when a notification first needs them.
    pub fn with_options(model: M, surface: S, options: BindingOptions) -> Self {
        let missing = model.supported_ops().missing();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|op| op.name()).collect();
            emit_log(
                LogLevel::Warn,
                &format!(
                    "text model does not implement {}; notifications needing them will fail",
                    names.join(", ")
                ),
            );
        }
        Self {
            model,
            surface,
            focus: Box::new(|| true),
            options,
        }
    }

    /// Set the predicate that tells whether the surface has input focus.
    pub fn set_focus_probe<F>(&mut self, probe: F)
    where
        F: Fn() -> bool + 'static,
    {
        self.focus = Box::new(probe);
    }

    /// Builder form of [`set_focus_probe`](Self::set_focus_probe).
    #[must_use]
    pub fn with_focus_probe<F>(mut self, probe: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        self.set_focus_probe(probe);
        self
    }

    /// Check if the surface currently has focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        (self.focus)()
    }

    /// Get the binding options.
    #[must_use]
    pub fn options(&self) -> BindingOptions {
        self.options
    }

    /// Get the text model.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get mutable access to the text model.
    ///
    /// Changes made here are not mirrored to the surface until the matching
    /// notification or [`refresh`](Self::refresh) is called.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Get the surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Get mutable access to the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Take the model and surface back out.
    pub fn into_parts(self) -> (M, S) {
        (self.model, self.surface)
    }

    /// Surface text with line endings normalized per the options.
    #[must_use]
    pub fn surface_text(&self) -> String {
        let raw = self.surface.value();
        if self.options.normalize_line_endings {
            normalize_line_endings(&raw).into_owned()
        } else {
            raw.into_owned()
        }
    }

    /// Handle a local input event.
    ///
    /// Diffs the surface against the model and applies the removal, then the
    /// insertion. Returns the applied diff, or `None` if the texts already
    /// matched and the model was not touched.
    ///
    /// The two model calls are not transactional: if the insertion fails,
    /// the removal stays applied.
    pub fn on_input(&mut self) -> Result<Option<TextDiff>> {
        let previous = self.model.get_text()?;
        let current = self.surface_text();
        if previous == current {
            return Ok(None);
        }

        let diff = TextDiff::compute(&previous, &current);
        emit_log(
            LogLevel::Debug,
            &format!(
                "input at {}: -{} +{} chars",
                diff.start,
                diff.removed.chars().count(),
                diff.inserted.chars().count()
            ),
        );

        for edit in diff.edits() {
            match &edit {
                Edit::Remove { position, text } => {
                    self.model.remove_text(*position, text)?;
                    emit_event("model.remove", &edit_payload(*position, text));
                }
                Edit::Insert { position, text } => {
                    self.model.insert_text(*position, text)?;
                    emit_event("model.insert", &edit_payload(*position, text));
                }
            }
        }

        Ok(Some(diff))
    }

    /// Handle `length` chars inserted into the model at `position`.
    pub fn on_insert(&mut self, position: usize, length: usize) -> Result<()> {
        emit_log(
            LogLevel::Debug,
            &format!("model insert at {position} (+{length})"),
        );
        self.sync_with_caret(|selection| selection.transform_insert(position, length))
    }

    /// Handle `length` chars removed from the model at `position`.
    pub fn on_remove(&mut self, position: usize, length: usize) -> Result<()> {
        emit_log(
            LogLevel::Debug,
            &format!("model remove at {position} (-{length})"),
        );
        self.sync_with_caret(|selection| selection.transform_remove(position, length))
    }

    /// Apply an edit to the model and update the surface to match.
    ///
    /// Shorthand for calling the model operation followed by
    /// [`on_insert`](Self::on_insert) or [`on_remove`](Self::on_remove).
    pub fn apply_remote(&mut self, edit: &Edit) -> Result<()> {
        match edit {
            Edit::Insert { position, text } => {
                self.model.insert_text(*position, text)?;
                self.on_insert(*position, edit.len())
            }
            Edit::Remove { position, text } => {
                self.model.remove_text(*position, text)?;
                self.on_remove(*position, edit.len())
            }
        }
    }

    /// Bring the surface text up to date with the model.
    ///
    /// Does nothing when the texts already match, so calling it twice in a
    /// row writes at most once. Returns whether the surface was written.
    pub fn refresh(&mut self) -> Result<bool> {
        let value = self.model.get_text()?;
        if self.surface_text() == value {
            return Ok(false);
        }

        let scroll_top = self.surface.scroll_top();
        self.surface.set_value(&value);
        let scroll_restored =
            self.options.preserve_scroll && self.surface.scroll_top() != scroll_top;
        if scroll_restored {
            self.surface.set_scroll_top(scroll_top);
        }

        emit_event(
            "surface.refresh",
            &json!({
                "chars": value.chars().count(),
                "scroll_restored": scroll_restored
            })
            .to_string(),
        );
        Ok(true)
    }

    /// Refresh the surface, carrying the caret across the model change.
    ///
    /// Both selection ends are computed before the refresh and written back
    /// together after it, and only while the surface is focused.
    fn sync_with_caret<F>(&mut self, transform: F) -> Result<()>
    where
        F: FnOnce(Selection) -> Selection,
    {
        let selection = self
            .is_focused()
            .then(|| transform(self.surface.selection()));
        self.refresh()?;
        if let Some(selection) = selection {
            self.surface.set_selection(selection);
        }
        Ok(())
    }
}

fn edit_payload(position: usize, text: &str) -> String {
    json!({ "position": position, "text": text }).to_string()
}

impl<M: fmt::Debug, S: fmt::Debug> fmt::Debug for TextDiffBinding<M, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextDiffBinding")
            .field("model", &self.model)
            .field("surface", &self.surface)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
