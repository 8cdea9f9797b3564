use std::any::Any;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use ahash::RandomState;
use hashbrown::{HashMap, HashSet};

use crate::hash::Key;
use crate::scope::Scope;

pub(crate) struct RuntimeInner {
    invalid: Cell<bool>,
    passes: Cell<u64>,
    slots: RefCell<HashMap<Key, Rc<dyn Any>, RandomState>>,
    touched: RefCell<HashSet<Key, RandomState>>,
}

impl RuntimeInner {
    fn invalidate(&self) {
        if !self.invalid.replace(true) {
            log::trace!("runtime invalidated after pass {}", self.passes.get());
        }
    }
}

/// Owner of remembered state and the invalidation flag for one view tree.
///
/// Single-threaded by construction: the runtime and every state handle are
/// `!Send`, so all writes are serialized through the host's event loop.
#[derive(Clone)]
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RuntimeInner {
                // Nothing has been rendered yet.
                invalid: Cell::new(true),
                passes: Cell::new(0),
                slots: RefCell::new(HashMap::with_hasher(RandomState::new())),
                touched: RefCell::new(HashSet::with_hasher(RandomState::new())),
            }),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Returns true when state changed since the last completed pass.
    pub fn is_invalid(&self) -> bool {
        self.inner.invalid.get()
    }

    pub fn invalidate(&self) {
        self.inner.invalidate();
    }

    /// Number of completed render passes.
    pub fn pass_count(&self) -> u64 {
        self.inner.passes.get()
    }

    /// Number of slots currently remembered.
    pub fn slot_count(&self) -> usize {
        self.inner.slots.borrow().len()
    }

    /// Runs one render pass.
    ///
    /// Clears the invalid flag before `content` runs, so writes made during
    /// the pass schedule another one. Slots that `content` did not touch are
    /// dropped afterwards.
    pub fn compose<R>(&self, content: impl FnOnce(&Scope<'_>) -> R) -> R {
        self.inner.invalid.set(false);
        self.inner.touched.borrow_mut().clear();
        let scope = Scope::new(self);
        let output = content(&scope);
        self.prune_untouched();
        let pass = self.inner.passes.get() + 1;
        self.inner.passes.set(pass);
        log::debug!("render pass {pass} complete ({} slots)", self.slot_count());
        output
    }

    pub(crate) fn slot<T: Clone + 'static>(&self, key: Key, init: impl FnOnce() -> T) -> T {
        self.inner.touched.borrow_mut().insert(key);
        if let Some(existing) = self.inner.slots.borrow().get(&key) {
            if let Some(value) = existing.downcast_ref::<T>() {
                return value.clone();
            }
            log::warn!("slot {key:#x} changed type; resetting");
        }
        let value = init();
        self.inner
            .slots
            .borrow_mut()
            .insert(key, Rc::new(value.clone()) as Rc<dyn Any>);
        value
    }

    fn prune_untouched(&self) {
        let touched = self.inner.touched.borrow();
        let mut slots = self.inner.slots.borrow_mut();
        let before = slots.len();
        slots.retain(|key, _| touched.contains(key));
        let dropped = before - slots.len();
        if dropped > 0 {
            log::trace!("dropped {dropped} slots no longer in the tree");
        }
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("invalid", &self.is_invalid())
            .field("passes", &self.pass_count())
            .field("slots", &self.slot_count())
            .finish()
    }
}

/// Weak reference used by state objects to invalidate their runtime.
#[derive(Clone, Default)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    /// A handle attached to no runtime; writes through it invalidate nothing.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn invalidate(&self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.invalidate();
        }
    }

    pub fn is_attached(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

impl fmt::Debug for RuntimeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeHandle")
            .field("attached", &self.is_attached())
            .finish()
    }
}
