//! The text model a binding keeps in sync.
//!
//! A model is anything that can report its text and accept insertions and
//! removals. Every operation on [`TextModel`] has a default body that fails
//! with [`Error::MissingOperation`], so a model used in one direction only
//! (say, display-only) implements just the operations it needs and fails
//! when an unimplemented one is actually called, not earlier.
//!
//! Key types:
//!
//! - [`TextModel`]: the capability trait
//! - [`ModelOps`]: which operations a model provides, for diagnostics
//! - [`FnModel`]: a model assembled from closures
//! - [`RopeModel`]: a standalone rope-backed model

mod hooks;
mod rope;

pub use hooks::FnModel;
pub use rope::RopeModel;

use bitflags::bitflags;

use crate::error::{Error, Operation, Result};

bitflags! {
    /// Set of operations a [`TextModel`] provides.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct ModelOps: u8 {
        /// [`TextModel::get_text`].
        const GET_TEXT    = 0x01;
        /// [`TextModel::insert_text`].
        const INSERT_TEXT = 0x02;
        /// [`TextModel::remove_text`].
        const REMOVE_TEXT = 0x04;
    }
}

impl ModelOps {
    /// Operations in this set's complement, in call order.
    #[must_use]
    pub fn missing(self) -> Vec<Operation> {
        [
            Operation::GetText,
            Operation::InsertText,
            Operation::RemoveText,
        ]
        .into_iter()
        .filter(|op| !self.contains(Self::from(*op)))
        .collect()
    }
}

impl From<Operation> for ModelOps {
    fn from(op: Operation) -> Self {
        match op {
            Operation::GetText => Self::GET_TEXT,
            Operation::InsertText => Self::INSERT_TEXT,
            Operation::RemoveText => Self::REMOVE_TEXT,
        }
    }
}

/// An externally owned text store.
///
/// Positions are char offsets. Implement the operations the binding will
/// actually call; the rest fail with [`Error::MissingOperation`] on use.
pub trait TextModel {
    /// Current authoritative text, with `\n` line endings.
    fn get_text(&self) -> Result<String> {
        Err(Error::missing(Operation::GetText))
    }

    /// Insert `text` at `position`.
    fn insert_text(&mut self, position: usize, text: &str) -> Result<()> {
        let _ = (position, text);
        Err(Error::missing(Operation::InsertText))
    }

    /// Remove `text` from `position` onwards.
    ///
    /// `text` is the exact content being removed; its char count is the
    /// length of the removed span.
    fn remove_text(&mut self, position: usize, text: &str) -> Result<()> {
        let _ = (position, text);
        Err(Error::missing(Operation::RemoveText))
    }

    /// Which operations this model provides.
    ///
    /// Only used for diagnostics; override it when some operations are left
    /// at their failing defaults.
    fn supported_ops(&self) -> ModelOps {
        ModelOps::all()
    }
}

impl<M: TextModel + ?Sized> TextModel for &mut M {
    fn get_text(&self) -> Result<String> {
        (**self).get_text()
    }

    fn insert_text(&mut self, position: usize, text: &str) -> Result<()> {
        (**self).insert_text(position, text)
    }

    fn remove_text(&mut self, position: usize, text: &str) -> Result<()> {
        (**self).remove_text(position, text)
    }

    fn supported_ops(&self) -> ModelOps {
        (**self).supported_ops()
    }
}

impl<M: TextModel + ?Sized> TextModel for Box<M> {
    fn get_text(&self) -> Result<String> {
        (**self).get_text()
    }

    fn insert_text(&mut self, position: usize, text: &str) -> Result<()> {
        (**self).insert_text(position, text)
    }

    fn remove_text(&mut self, position: usize, text: &str) -> Result<()> {
        (**self).remove_text(position, text)
    }

    fn supported_ops(&self) -> ModelOps {
        (**self).supported_ops()
    }
}
