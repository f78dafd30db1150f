//! Text model assembled from closures.

use std::fmt;

use super::{ModelOps, TextModel};
use crate::error::{Error, Operation, Result};

type GetHook = Box<dyn Fn() -> String>;
type EditHook = Box<dyn FnMut(usize, &str)>;

/// A [`TextModel`] whose operations are supplied as closures.
///
/// Convenient when the real model lives elsewhere (behind an `Rc<RefCell<_>>`
/// or a document handle) and only a few calls need forwarding.
/// Operations left unset fail with [`Error::MissingOperation`] when called.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use text_diff_binding::{FnModel, TextModel};
///
/// let text = Rc::new(RefCell::new(String::from("hello")));
/// let get = Rc::clone(&text);
/// let model = FnModel::new().on_get(move || get.borrow().clone());
///
/// assert_eq!(model.get_text().unwrap(), "hello");
/// ```
#[derive(Default)]
pub struct FnModel {
    get: Option<GetHook>,
    insert: Option<EditHook>,
    remove: Option<EditHook>,
}

impl FnModel {
    /// Create a model with no operations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the `get_text` operation.
    #[must_use]
    pub fn on_get<F>(mut self, get: F) -> Self
    where
        F: Fn() -> String + 'static,
    {
        self.get = Some(Box::new(get));
        self
    }

    /// Supply the `insert_text` operation.
    #[must_use]
    pub fn on_insert<F>(mut self, insert: F) -> Self
    where
        F: FnMut(usize, &str) + 'static,
    {
        self.insert = Some(Box::new(insert));
        self
    }

    /// Supply the `remove_text` operation.
    #[must_use]
    pub fn on_remove<F>(mut self, remove: F) -> Self
    where
        F: FnMut(usize, &str) + 'static,
    {
        self.remove = Some(Box::new(remove));
        self
    }
}

impl TextModel for FnModel {
    fn get_text(&self) -> Result<String> {
        let get = self
            .get
            .as_ref()
            .ok_or_else(|| Error::missing(Operation::GetText))?;
        Ok(get())
    }

    fn insert_text(&mut self, position: usize, text: &str) -> Result<()> {
        let insert = self
            .insert
            .as_mut()
            .ok_or_else(|| Error::missing(Operation::InsertText))?;
        insert(position, text);
        Ok(())
    }

    fn remove_text(&mut self, position: usize, text: &str) -> Result<()> {
        let remove = self
            .remove
            .as_mut()
            .ok_or_else(|| Error::missing(Operation::RemoveText))?;
        remove(position, text);
        Ok(())
    }

    fn supported_ops(&self) -> ModelOps {
        let mut ops = ModelOps::empty();
        ops.set(ModelOps::GET_TEXT, self.get.is_some());
        ops.set(ModelOps::INSERT_TEXT, self.insert.is_some());
        ops.set(ModelOps::REMOVE_TEXT, self.remove.is_some());
        ops
    }
}

impl fmt::Debug for FnModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnModel")
            .field("ops", &self.supported_ops())
            .finish()
    }
}
