use crate::monitor::KeyOutcome;
use crate::types::{Key, KeyPress};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDecision {
    /// Consume the key and fire the submit callback.
    Submit,
    /// Let the editor handle the key normally.
    PassThrough,
}

/// Return submits, Shift+Return inserts a newline, everything else is editing.
pub fn classify(press: &KeyPress) -> KeyDecision {
    match press.key {
        Key::Return if !press.modifiers.shift => KeyDecision::Submit,
        _ => KeyDecision::PassThrough,
    }
}

/// Focus state shared between the widget that observes clicks and the key
/// listener living in the window-wide registry.
#[derive(Debug, Clone, Default)]
pub struct FocusFlag(Rc<Cell<bool>>);

impl FocusFlag {
    pub fn get(&self) -> bool {
        self.0.get()
    }

    /// Returns `true` if the value changed.
    pub fn set(&self, focused: bool) -> bool {
        self.0.replace(focused) != focused
    }
}

/// Key listener that turns an unshifted Return into `on_submit` while focused.
///
/// The event is consumed even when no submit message is configured, so the
/// editor never sees the Return and no newline is inserted.
pub fn submit_listener<T>(
    focus: FocusFlag,
    on_submit: Option<T>,
) -> impl FnMut(&KeyPress) -> KeyOutcome<T> + 'static
where
    T: Clone + 'static,
{
    move |press| {
        if focus.get() && classify(press) == KeyDecision::Submit {
            KeyOutcome::Consumed(on_submit.clone())
        } else {
            KeyOutcome::PassThrough
        }
    }
}
