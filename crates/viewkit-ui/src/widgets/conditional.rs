//! Rendering that depends on a toggle.

#![allow(non_snake_case)]

use std::fmt;
use std::rc::Rc;

use viewkit_core::ToggleState;

use crate::node::DisplayNode;

type Branch = Rc<dyn Fn(&ToggleState) -> DisplayNode>;

/// Chooses between two subtrees based on a [`ToggleState`].
///
/// Only the active branch is evaluated on each render. The `when_off` branch
/// is shown first, since toggles start off.
#[derive(Clone)]
pub struct Conditional {
    state: ToggleState,
    when_off: Branch,
    when_on: Branch,
}

impl Conditional {
    pub fn new(
        state: ToggleState,
        when_off: impl Fn(&ToggleState) -> DisplayNode + 'static,
        when_on: impl Fn(&ToggleState) -> DisplayNode + 'static,
    ) -> Self {
        Self {
            state,
            when_off: Rc::new(when_off),
            when_on: Rc::new(when_on),
        }
    }

    pub fn state(&self) -> &ToggleState {
        &self.state
    }

    pub fn render(&self) -> DisplayNode {
        if self.state.is_on() {
            (self.when_on)(&self.state)
        } else {
            (self.when_off)(&self.state)
        }
    }
}

impl fmt::Debug for Conditional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conditional")
            .field("on", &self.state.is_on())
            .finish_non_exhaustive()
    }
}

impl From<Conditional> for DisplayNode {
    fn from(conditional: Conditional) -> Self {
        conditional.render()
    }
}

/// Evaluates exactly one of the two branches.
pub fn If(
    condition: bool,
    then: impl FnOnce() -> DisplayNode,
    otherwise: impl FnOnce() -> DisplayNode,
) -> DisplayNode {
    if condition {
        then()
    } else {
        otherwise()
    }
}
