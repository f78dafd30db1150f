//! Switchable focus probe.

use std::cell::Cell;
use std::rc::Rc;

/// Shared focus flag standing in for "the element that has focus".
#[derive(Clone, Debug)]
pub struct FocusToggle {
    focused: Rc<Cell<bool>>,
}

impl FocusToggle {
    /// Create a toggle, initially focused.
    pub fn new() -> Self {
        Self {
            focused: Rc::new(Cell::new(true)),
        }
    }

    /// Give focus to the surface.
    pub fn focus(&self) {
        self.focused.set(true);
    }

    /// Move focus elsewhere.
    pub fn blur(&self) {
        self.focused.set(false);
    }

    /// Probe closure to hand to the binding.
    pub fn probe(&self) -> Box<dyn Fn() -> bool> {
        let focused = Rc::clone(&self.focused);
        Box::new(move || focused.get())
    }
}

impl Default for FocusToggle {
    fn default() -> Self {
        Self::new()
    }
}
