//! `text_diff_binding` - Keep a text box and a text model in sync
//!
//! Translates free-form edits in an input surface into minimal insert/remove
//! calls on an external text model, and applies model changes back to the
//! surface without disturbing the caret or scroll offset.
//!
//! Key types:
//!
//! - [`TextDiff`]: minimal prefix/suffix diff between two strings
//! - [`Selection`]: caret range carried across edits
//! - [`TextModel`]: the model a binding writes to
//! - [`TextSurface`]: the text box a binding reads from
//! - [`TextDiffBinding`]: the binding itself
//!
//! # Examples
//!
//! ```
//! use text_diff_binding::{MemorySurface, RopeModel, TextDiffBinding};
//!
//! let mut binding = TextDiffBinding::new(
//!     RopeModel::with_text("hello world"),
//!     MemorySurface::with_text("hello there"),
//! );
//!
//! let diff = binding.on_input().unwrap().unwrap();
//! assert_eq!(diff.start, 6);
//! assert_eq!(diff.removed, "world");
//! assert_eq!(diff.inserted, "there");
//! assert_eq!(binding.model().to_string(), "hello there");
//! ```

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow TextDiff in diff etc
#![allow(clippy::missing_errors_doc)] // Every error is MissingOperation
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::inherent_to_string)] // to_string methods are convenient
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod binding;
pub mod cursor;
pub mod diff;
pub mod error;
pub mod event;
pub mod model;
pub mod surface;

// Re-export core types at crate root
pub use binding::{BindingOptions, TextDiffBinding};
pub use cursor::{Selection, transform_for_insert, transform_for_remove};
pub use diff::{Edit, TextDiff, diff};
pub use error::{Error, Operation, Result};
pub use event::{
    LogLevel, clear_event_callback, clear_log_callback, emit_event, emit_log,
    set_event_callback, set_log_callback,
};
pub use model::{FnModel, ModelOps, RopeModel, TextModel};
pub use surface::{MemorySurface, TextSurface, normalize_line_endings};
