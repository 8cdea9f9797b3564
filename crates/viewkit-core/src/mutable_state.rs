use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::runtime::RuntimeHandle;

struct MutableStateInner<T> {
    value: RefCell<T>,
    runtime: RuntimeHandle,
}

/// Shared value whose writes invalidate the owning runtime.
pub struct MutableState<T: 'static> {
    inner: Rc<MutableStateInner<T>>,
}

impl<T: 'static> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> PartialEq for MutableState<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: 'static> Eq for MutableState<T> {}

impl<T: 'static> MutableState<T> {
    pub fn with_runtime(value: T, runtime: RuntimeHandle) -> Self {
        Self {
            inner: Rc::new(MutableStateInner {
                value: RefCell::new(value),
                runtime,
            }),
        }
    }

    /// State that is not attached to any runtime.
    pub fn detached(value: T) -> Self {
        Self::with_runtime(value, RuntimeHandle::detached())
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = {
            let mut value = self.inner.value.borrow_mut();
            f(&mut value)
        };
        self.inner.runtime.invalidate();
        result
    }

    pub fn replace(&self, value: T) -> T {
        let previous = self.inner.value.replace(value);
        self.inner.runtime.invalidate();
        previous
    }

    pub fn set(&self, value: T) {
        self.replace(value);
    }
}

impl<T: Clone + 'static> MutableState<T> {
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    pub fn value(&self) -> T {
        self.get()
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for MutableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|value| {
            f.debug_struct("MutableState")
                .field("value", value)
                .finish()
        })
    }
}
