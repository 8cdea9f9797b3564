//! Reusable custom modifiers.

use super::{Color, DisplayNode, Font, Shape, StyleModifier, DEFAULT_PADDING};

/// Large text on a colored capsule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapsuleStyle {
    pub font: Font,
    pub padding: f32,
    pub background: Color,
}

impl CapsuleStyle {
    pub fn new(background: Color) -> Self {
        Self {
            background,
            ..Self::default()
        }
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }
}

impl Default for CapsuleStyle {
    fn default() -> Self {
        Self {
            font: Font::LargeTitle,
            padding: DEFAULT_PADDING,
            background: Color::BLUE,
        }
    }
}

impl StyleModifier for CapsuleStyle {
    fn apply(&self, node: DisplayNode) -> DisplayNode {
        node.font(self.font)
            .padding(self.padding)
            .background(self.background)
            .clip_shape(Shape::Capsule)
    }
}

/// White large title on a rounded blue card.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TitleStyle;

impl StyleModifier for TitleStyle {
    fn apply(&self, node: DisplayNode) -> DisplayNode {
        node.font(Font::LargeTitle)
            .foreground_color(Color::WHITE)
            .padding_default()
            .background(Color::BLUE)
            .corner_radius(10.0)
    }
}
