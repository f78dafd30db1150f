//! Recording text model.

use std::cell::RefCell;
use std::rc::Rc;

use text_diff_binding::FnModel;

#[derive(Debug, Default)]
struct State {
    text: String,
    calls: Vec<String>,
}

/// Shared text plus a log of model calls, observed through [`FnModel`]s.
///
/// Calls are applied to the shared text (char-indexed) and recorded as
/// `insert(pos, "text")` / `remove(pos, "text")`.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    state: Rc<RefCell<State>>,
}

impl Recorder {
    /// Create a recorder holding `text`.
    pub fn new(text: &str) -> Self {
        let recorder = Self::default();
        recorder.set_text(text);
        recorder
    }

    /// Current model text.
    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    /// Replace the model text without recording a call.
    pub fn set_text(&self, text: &str) {
        self.state.borrow_mut().text = text.to_string();
    }

    /// Recorded calls, oldest first.
    pub fn calls(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }

    /// A model providing all three operations.
    pub fn model(&self) -> FnModel {
        self.getter()
            .on_insert(insert_hook(Rc::clone(&self.state)))
            .on_remove(remove_hook(Rc::clone(&self.state)))
    }

    /// A model providing only `get_text`.
    pub fn getter(&self) -> FnModel {
        let state = Rc::clone(&self.state);
        FnModel::new().on_get(move || state.borrow().text.clone())
    }

    /// A model providing `get_text` and `insert_text`.
    pub fn without_remove(&self) -> FnModel {
        self.getter().on_insert(insert_hook(Rc::clone(&self.state)))
    }

    /// A model providing `get_text` and `remove_text`.
    pub fn without_insert(&self) -> FnModel {
        self.getter().on_remove(remove_hook(Rc::clone(&self.state)))
    }
}

fn insert_hook(state: Rc<RefCell<State>>) -> impl FnMut(usize, &str) {
    move |pos, text| {
        let mut state = state.borrow_mut();
        let at = byte_offset(&state.text, pos);
        state.text.insert_str(at, text);
        state.calls.push(format!("insert({pos}, {text:?})"));
    }
}

fn remove_hook(state: Rc<RefCell<State>>) -> impl FnMut(usize, &str) {
    move |pos, text| {
        let mut state = state.borrow_mut();
        let start = byte_offset(&state.text, pos);
        let end = start + byte_offset(&state.text[start..], text.chars().count());
        state.text.replace_range(start..end, "");
        state.calls.push(format!("remove({pos}, {text:?})"));
    }
}

fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(idx, _)| idx)
}
