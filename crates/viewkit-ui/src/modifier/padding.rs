use super::{DisplayNode, EdgeInsets, Modifier, StyleOp, DEFAULT_PADDING};

impl Modifier {
    pub fn padding(p: f32) -> Self {
        Self::with_op(StyleOp::Padding(EdgeInsets::uniform(p)))
    }

    pub fn padding_default() -> Self {
        Self::padding(DEFAULT_PADDING)
    }

    pub fn padding_horizontal(horizontal: f32) -> Self {
        Self::with_op(StyleOp::Padding(EdgeInsets::horizontal(horizontal)))
    }

    pub fn padding_vertical(vertical: f32) -> Self {
        Self::with_op(StyleOp::Padding(EdgeInsets::vertical(vertical)))
    }

    pub fn padding_each(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::with_op(StyleOp::Padding(EdgeInsets::from_components(
            left, top, right, bottom,
        )))
    }

    /// Total padding per edge, summed across the chain.
    pub fn padding_values(&self) -> EdgeInsets {
        let mut total = EdgeInsets::default();
        for op in self.0.iter() {
            if let StyleOp::Padding(insets) = op {
                total += *insets;
            }
        }
        total
    }
}

impl DisplayNode {
    pub fn padding(self, p: f32) -> Self {
        self.styled(StyleOp::Padding(EdgeInsets::uniform(p)))
    }

    pub fn padding_default(self) -> Self {
        self.padding(DEFAULT_PADDING)
    }

    pub fn padding_insets(self, insets: EdgeInsets) -> Self {
        self.styled(StyleOp::Padding(insets))
    }
}
