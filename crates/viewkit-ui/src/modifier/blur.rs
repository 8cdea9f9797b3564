use super::{DisplayNode, Modifier, StyleOp};

impl Modifier {
    pub fn blur(radius: f32) -> Self {
        Self::with_op(StyleOp::Blur(radius.max(0.0)))
    }
}

impl DisplayNode {
    /// Blurs this node; nested blurs add up.
    pub fn blur(self, radius: f32) -> Self {
        self.styled(StyleOp::Blur(radius.max(0.0)))
    }
}
