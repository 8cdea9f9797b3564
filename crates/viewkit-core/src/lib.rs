//! State, bindings and the render-pass runtime for viewkit.
//!
//! Views are plain functions that build an immutable tree from the current
//! state. The [`Runtime`] owns that state across passes: every write through a
//! [`MutableState`], [`ToggleState`] or [`Binding`] marks the runtime invalid,
//! and the host re-runs the root view until it settles.

mod binding;
pub mod hash;
mod mutable_state;
mod runtime;
mod scope;
mod toggle;

pub use binding::Binding;
pub use hash::{join_key, location_key, Key};
pub use mutable_state::MutableState;
pub use runtime::{Runtime, RuntimeHandle};
pub use scope::Scope;
pub use toggle::ToggleState;

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
