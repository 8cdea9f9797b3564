use crate::binding::Binding;
use crate::mutable_state::MutableState;
use crate::runtime::RuntimeHandle;

/// Boolean state owned by one component and flipped by user actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleState {
    state: MutableState<bool>,
}

impl ToggleState {
    pub fn with_runtime(initial: bool, runtime: RuntimeHandle) -> Self {
        Self {
            state: MutableState::with_runtime(initial, runtime),
        }
    }

    pub fn detached(initial: bool) -> Self {
        Self::with_runtime(initial, RuntimeHandle::detached())
    }

    pub fn is_on(&self) -> bool {
        self.state.get()
    }

    pub fn set(&self, on: bool) {
        self.state.set(on);
    }

    pub fn toggle(&self) {
        self.state.update(|on| *on = !*on);
    }

    /// Picks `on` or `off` for the current value.
    pub fn select<T>(&self, on: T, off: T) -> T {
        if self.is_on() {
            on
        } else {
            off
        }
    }

    pub fn binding(&self) -> Binding<bool> {
        Binding::from_state(&self.state)
    }
}
