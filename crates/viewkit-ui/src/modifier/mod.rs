//! Style modifiers for viewkit
//!
//! A [`Modifier`] is an ordered list of [`StyleOp`]s. Applying it wraps the
//! node once per operation, left to right, so the last operation ends up
//! outermost. Order is never normalized: `padding` then `background` paints a
//! bigger box than `background` then `padding`.

use std::fmt;
use std::rc::Rc;

mod background;
mod blur;
mod frame;
mod padding;
mod styles;
mod text_style;

pub use styles::{CapsuleStyle, TitleStyle};
pub use viewkit_graphics::{Color, EdgeInsets, Font, Shape};
pub use viewkit_layout::Alignment;

use crate::node::DisplayNode;

/// Padding applied by the no-argument padding modifier.
pub const DEFAULT_PADDING: f32 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleOp {
    Font(Font),
    Padding(EdgeInsets),
    Foreground(Color),
    Background(Color),
    ClipShape(Shape),
    Blur(f32),
    /// Fixed size on each specified axis; the child is aligned inside.
    Frame {
        width: Option<f32>,
        height: Option<f32>,
        alignment: Alignment,
    },
    /// Upper bounds; an infinite bound expands to the offered space.
    MaxFrame {
        max_width: Option<f32>,
        max_height: Option<f32>,
        alignment: Alignment,
    },
}

impl StyleOp {
    /// True for operations whose value flows down to descendants.
    pub fn is_environment(&self) -> bool {
        matches!(self, StyleOp::Font(_) | StyleOp::Foreground(_))
    }
}

/// Pure transformation from one display node to a styled one.
pub trait StyleModifier {
    fn apply(&self, node: DisplayNode) -> DisplayNode;
}

impl StyleModifier for StyleOp {
    fn apply(&self, node: DisplayNode) -> DisplayNode {
        node.styled(*self)
    }
}

impl<F> StyleModifier for F
where
    F: Fn(DisplayNode) -> DisplayNode,
{
    fn apply(&self, node: DisplayNode) -> DisplayNode {
        self(node)
    }
}

/// Ordered list of modifiers applied left to right.
#[derive(Clone, Default)]
pub struct Chain(Vec<Rc<dyn StyleModifier>>);

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, modifier: impl StyleModifier + 'static) -> Self {
        self.0.push(Rc::new(modifier));
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl StyleModifier for Chain {
    fn apply(&self, node: DisplayNode) -> DisplayNode {
        self.0
            .iter()
            .fold(node, |node, modifier| modifier.apply(node))
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Chain").field(&self.0.len()).finish()
    }
}

/// Builds a [`Chain`] from boxed modifiers.
pub fn chain(modifiers: Vec<Rc<dyn StyleModifier>>) -> Chain {
    Chain(modifiers)
}

/// Reusable list of style operations.
#[derive(Clone, Default, PartialEq)]
pub struct Modifier(Rc<Vec<StyleOp>>);

impl fmt::Debug for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl Modifier {
    pub fn empty() -> Self {
        Self::default()
    }

    fn with_op(op: StyleOp) -> Self {
        Self(Rc::new(vec![op]))
    }

    pub fn from_ops(ops: impl IntoIterator<Item = StyleOp>) -> Self {
        Self(Rc::new(ops.into_iter().collect()))
    }

    pub fn ops(&self) -> &[StyleOp] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn then(&self, next: Modifier) -> Modifier {
        if self.0.is_empty() {
            return next;
        }
        if next.0.is_empty() {
            return self.clone();
        }
        let mut ops = (*self.0).clone();
        ops.extend(next.0.iter().copied());
        Modifier(Rc::new(ops))
    }

    /// Same operations in reverse order.
    pub fn reversed(&self) -> Modifier {
        Modifier::from_ops(self.0.iter().rev().copied())
    }
}

impl StyleModifier for Modifier {
    fn apply(&self, node: DisplayNode) -> DisplayNode {
        self.0.iter().fold(node, |node, op| node.styled(*op))
    }
}

impl DisplayNode {
    /// Applies any style modifier to this node.
    pub fn modifier(self, modifier: impl StyleModifier) -> Self {
        modifier.apply(self)
    }
}

#[cfg(test)]
#[path = "tests/modifier_tests.rs"]
mod tests;
