use std::cell::RefCell;
use std::hash::Hash;
use std::panic::Location;

use crate::hash::{hash_one, join_key, location_key, Key};
use crate::mutable_state::MutableState;
use crate::runtime::Runtime;
use crate::toggle::ToggleState;

/// Per-pass view of the runtime handed to view functions.
///
/// State is keyed by the caller's source location joined with any keys pushed
/// through [`Scope::with_key`], so loops must key their iterations.
pub struct Scope<'a> {
    runtime: &'a Runtime,
    keys: RefCell<Vec<Key>>,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(runtime: &'a Runtime) -> Self {
        Self {
            runtime,
            keys: RefCell::new(Vec::new()),
        }
    }

    pub fn runtime(&self) -> &Runtime {
        self.runtime
    }

    /// Runs `content` with `key` pushed onto the key path.
    pub fn with_key<K: Hash + ?Sized, R>(&self, key: &K, content: impl FnOnce(&Self) -> R) -> R {
        self.keys.borrow_mut().push(hash_one(key));
        let _pop = KeyGuard { scope: self };
        content(self)
    }

    /// Returns the value remembered at the caller's location, creating it on first use.
    #[track_caller]
    pub fn remember<T: Clone + 'static>(&self, init: impl FnOnce() -> T) -> T {
        let key = self.caller_key(Location::caller());
        self.runtime.slot(key, init)
    }

    #[track_caller]
    pub fn use_state<T: 'static>(&self, init: impl FnOnce() -> T) -> MutableState<T> {
        let key = self.caller_key(Location::caller());
        let handle = self.runtime.handle();
        self.runtime
            .slot(key, move || MutableState::with_runtime(init(), handle))
    }

    /// Toggle remembered at the caller's location, initially off.
    #[track_caller]
    pub fn use_toggle(&self) -> ToggleState {
        let key = self.caller_key(Location::caller());
        let handle = self.runtime.handle();
        self.runtime
            .slot(key, move || ToggleState::with_runtime(false, handle))
    }

    fn caller_key(&self, location: &Location<'_>) -> Key {
        let site = location_key(location.file(), location.line(), location.column());
        self.keys
            .borrow()
            .iter()
            .rev()
            .fold(site, |key, parent| join_key(*parent, key))
    }
}

/// Pops the innermost key when dropped, including during unwinding.
struct KeyGuard<'s, 'a> {
    scope: &'s Scope<'a>,
}

impl Drop for KeyGuard<'_, '_> {
    fn drop(&mut self) {
        self.scope.keys.borrow_mut().pop();
    }
}
