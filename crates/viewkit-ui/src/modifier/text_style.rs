use super::{Color, DisplayNode, Font, Modifier, StyleOp};

impl Modifier {
    pub fn font(font: Font) -> Self {
        Self::with_op(StyleOp::Font(font))
    }

    pub fn foreground_color(color: Color) -> Self {
        Self::with_op(StyleOp::Foreground(color))
    }
}

impl DisplayNode {
    /// Sets the font for this node and its descendants.
    pub fn font(self, font: Font) -> Self {
        self.styled(StyleOp::Font(font))
    }

    /// Sets the foreground color for this node and its descendants.
    pub fn foreground_color(self, color: Color) -> Self {
        self.styled(StyleOp::Foreground(color))
    }
}
