use super::{Color, DisplayNode, Modifier, Shape, StyleOp};

impl Modifier {
    pub fn background(color: Color) -> Self {
        Self::with_op(StyleOp::Background(color))
    }

    pub fn clip_shape(shape: Shape) -> Self {
        Self::with_op(StyleOp::ClipShape(shape))
    }

    pub fn rounded_corners(radius: f32) -> Self {
        Self::clip_shape(Shape::rounded(radius))
    }

    /// Outermost background color in the chain.
    pub fn background_color(&self) -> Option<Color> {
        self.0.iter().rev().find_map(|op| match op {
            StyleOp::Background(color) => Some(*color),
            _ => None,
        })
    }

    pub fn corner_shape(&self) -> Option<Shape> {
        self.0.iter().rev().find_map(|op| match op {
            StyleOp::ClipShape(shape) => Some(*shape),
            _ => None,
        })
    }
}

impl DisplayNode {
    pub fn background(self, color: Color) -> Self {
        self.styled(StyleOp::Background(color))
    }

    pub fn clip_shape(self, shape: Shape) -> Self {
        self.styled(StyleOp::ClipShape(shape))
    }

    pub fn corner_radius(self, radius: f32) -> Self {
        self.clip_shape(Shape::rounded(radius))
    }
}
