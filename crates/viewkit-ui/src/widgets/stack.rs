//! Vertical and horizontal stacks.

#![allow(non_snake_case)]

use viewkit_layout::{HorizontalAlignment, LinearArrangement, VerticalAlignment};

use super::builder::ViewBuilder;
use crate::node::DisplayNode;

/// Spacing used when a stack does not set its own.
pub const DEFAULT_STACK_SPACING: f32 = 8.0;

/// Main-axis arrangement and cross-axis alignment for a vertical stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VStackSpec {
    pub arrangement: LinearArrangement,
    pub alignment: HorizontalAlignment,
}

impl VStackSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed gap between children; the stack hugs its content.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.arrangement = LinearArrangement::spaced_by(spacing);
        self
    }

    /// Distributes children over the offered height.
    pub fn arrangement(mut self, arrangement: LinearArrangement) -> Self {
        self.arrangement = arrangement;
        self
    }

    pub fn alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl Default for VStackSpec {
    fn default() -> Self {
        Self {
            arrangement: LinearArrangement::spaced_by(DEFAULT_STACK_SPACING),
            alignment: HorizontalAlignment::Center,
        }
    }
}

/// Main-axis arrangement and cross-axis alignment for a horizontal stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HStackSpec {
    pub arrangement: LinearArrangement,
    pub alignment: VerticalAlignment,
}

impl HStackSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.arrangement = LinearArrangement::spaced_by(spacing);
        self
    }

    pub fn arrangement(mut self, arrangement: LinearArrangement) -> Self {
        self.arrangement = arrangement;
        self
    }

    pub fn alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl Default for HStackSpec {
    fn default() -> Self {
        Self {
            arrangement: LinearArrangement::spaced_by(DEFAULT_STACK_SPACING),
            alignment: VerticalAlignment::Center,
        }
    }
}

pub fn VStack(spec: VStackSpec, content: impl ViewBuilder) -> DisplayNode {
    DisplayNode::VStack {
        spec,
        children: content.build(),
    }
}

pub fn HStack(spec: HStackSpec, content: impl ViewBuilder) -> DisplayNode {
    DisplayNode::HStack {
        spec,
        children: content.build(),
    }
}
