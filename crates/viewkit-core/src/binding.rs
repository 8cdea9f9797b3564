use std::fmt;
use std::rc::Rc;

use crate::mutable_state::MutableState;

/// Read/write accessor pair handed from a parent to a child.
///
/// The child never owns the value; writes go back through the parent's state
/// so the parent's runtime re-renders.
pub struct Binding<T: 'static> {
    read: Rc<dyn Fn() -> T>,
    write: Rc<dyn Fn(T)>,
}

impl<T: 'static> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            read: Rc::clone(&self.read),
            write: Rc::clone(&self.write),
        }
    }
}

impl<T: 'static> PartialEq for Binding<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.read, &other.read) && Rc::ptr_eq(&self.write, &other.write)
    }
}

impl<T: 'static> Binding<T> {
    pub fn new(read: impl Fn() -> T + 'static, write: impl Fn(T) + 'static) -> Self {
        Self {
            read: Rc::new(read),
            write: Rc::new(write),
        }
    }

    pub fn get(&self) -> T {
        (self.read)()
    }

    pub fn set(&self, value: T) {
        (self.write)(value)
    }

    pub fn update(&self, f: impl FnOnce(T) -> T) {
        self.set(f(self.get()));
    }
}

impl<T: Clone + 'static> Binding<T> {
    pub fn from_state(state: &MutableState<T>) -> Self {
        let reader = state.clone();
        let writer = state.clone();
        Self::new(move || reader.get(), move |value| writer.set(value))
    }

    /// Read-only binding; writes are ignored.
    pub fn constant(value: T) -> Self {
        Self::new(move || value.clone(), |_| {})
    }
}

impl Binding<bool> {
    pub fn toggle(&self) {
        self.update(|on| !on);
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding").field("value", &self.get()).finish()
    }
}
