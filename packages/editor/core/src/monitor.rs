//! Window-wide key monitoring with explicit acquire/release.
//!
//! A [`KeyMonitors`] registry sees every key-down before text insertion.
//! Each mounted editor installs exactly one listener and holds the returned
//! [`MonitorHandle`]. The listener is removed on [`MonitorHandle::dispose`],
//! and also when the handle is dropped, so a torn-down editor can never be
//! reached by a later key event.

use crate::keys::{submit_listener, FocusFlag};
use crate::types::{KeyPress, Platform};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome<T> {
    /// The key was swallowed. Carries the message to emit, if any.
    Consumed(Option<T>),
    PassThrough,
}

impl<T> KeyOutcome<T> {
    pub fn is_consumed(&self) -> bool {
        matches!(self, KeyOutcome::Consumed(_))
    }
}

type Listener<T> = Box<dyn FnMut(&KeyPress) -> KeyOutcome<T>>;

struct Registry<T> {
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

pub struct KeyMonitors<T> {
    inner: Rc<RefCell<Registry<T>>>,
}

impl<T> KeyMonitors<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn install<F>(&self, listener: F) -> MonitorHandle<T>
    where
        F: FnMut(&KeyPress) -> KeyOutcome<T> + 'static,
    {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Box::new(listener)));
        debug!(target: "editor::monitor", id, installed = registry.listeners.len(), "key monitor installed");

        MonitorHandle {
            id,
            registry: Rc::downgrade(&self.inner),
            released: false,
        }
    }

    /// Runs listeners in install order; the first one to consume wins.
    pub fn dispatch(&self, press: &KeyPress) -> KeyOutcome<T> {
        let mut registry = self.inner.borrow_mut();
        for (_, listener) in registry.listeners.iter_mut() {
            if let KeyOutcome::Consumed(message) = listener(press) {
                return KeyOutcome::Consumed(message);
            }
        }
        KeyOutcome::PassThrough
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for KeyMonitors<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for KeyMonitors<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for KeyMonitors<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMonitors")
            .field("installed", &self.len())
            .finish()
    }
}

/// Ownership of one installed listener.
pub struct MonitorHandle<T> {
    id: u64,
    registry: Weak<RefCell<Registry<T>>>,
    released: bool,
}

impl<T> MonitorHandle<T> {
    /// Delivers a key to this listener only. Passes through once released.
    pub fn deliver(&self, press: &KeyPress) -> KeyOutcome<T> {
        let Some(registry) = self.registry.upgrade() else {
            return KeyOutcome::PassThrough;
        };
        let mut registry = registry.borrow_mut();
        match registry.listeners.iter_mut().find(|(id, _)| *id == self.id) {
            Some((_, listener)) => listener(press),
            None => KeyOutcome::PassThrough,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.released
            && self.registry.upgrade().is_some_and(|registry| {
                registry.borrow().listeners.iter().any(|(id, _)| *id == self.id)
            })
    }

    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.borrow_mut();
            registry.listeners.retain(|(id, _)| *id != self.id);
            debug!(target: "editor::monitor", id = self.id, installed = registry.listeners.len(), "key monitor removed");
        }
    }
}

impl<T> Drop for MonitorHandle<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T> fmt::Debug for MonitorHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonitorHandle")
            .field("id", &self.id)
            .field("released", &self.released)
            .finish()
    }
}

/// Per-instance pairing of key monitor install and removal.
///
/// `attach` installs at most one listener; `detach` removes it exactly once.
/// Re-mounting after a detach installs a fresh listener.
#[derive(Debug)]
pub struct Mount<T> {
    handle: Option<MonitorHandle<T>>,
}

impl<T> Default for Mount<T> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<T: Clone + 'static> Mount<T> {
    /// Returns `true` if a listener was installed by this call.
    pub fn attach(
        &mut self,
        monitors: &KeyMonitors<T>,
        platform: Platform,
        focus: &FocusFlag,
        on_submit: Option<T>,
    ) -> bool {
        if !platform.supports_key_monitor() {
            debug!(target: "editor::monitor", ?platform, "no key monitor on this platform, Return inserts newlines");
            return false;
        }
        if self.handle.is_some() {
            return false;
        }

        self.handle = Some(monitors.install(submit_listener(focus.clone(), on_submit)));
        true
    }
}

impl<T> Mount<T> {
    /// Returns `true` if a listener was removed by this call.
    pub fn detach(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.dispose();
                true
            }
            None => false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.handle.as_ref().is_some_and(MonitorHandle::is_active)
    }

    pub fn deliver(&self, press: &KeyPress) -> KeyOutcome<T> {
        match &self.handle {
            Some(handle) => handle.deliver(press),
            None => KeyOutcome::PassThrough,
        }
    }
}
