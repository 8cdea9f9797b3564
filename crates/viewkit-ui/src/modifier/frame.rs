use super::{Alignment, DisplayNode, Modifier, StyleOp};

impl Modifier {
    pub fn frame(width: f32, height: f32) -> Self {
        Self::with_op(StyleOp::Frame {
            width: Some(width.max(0.0)),
            height: Some(height.max(0.0)),
            alignment: Alignment::CENTER,
        })
    }

    pub fn fill_max_size() -> Self {
        Self::with_op(StyleOp::MaxFrame {
            max_width: Some(f32::INFINITY),
            max_height: Some(f32::INFINITY),
            alignment: Alignment::CENTER,
        })
    }
}

impl DisplayNode {
    pub fn frame(self, width: f32, height: f32) -> Self {
        self.frame_aligned(Some(width), Some(height), Alignment::CENTER)
    }

    pub fn frame_aligned(
        self,
        width: Option<f32>,
        height: Option<f32>,
        alignment: Alignment,
    ) -> Self {
        self.styled(StyleOp::Frame {
            width: width.map(|w| w.max(0.0)),
            height: height.map(|h| h.max(0.0)),
            alignment,
        })
    }

    /// Caps the size per axis; pass `f32::INFINITY` to fill the offered space.
    pub fn max_frame(self, max_width: Option<f32>, max_height: Option<f32>) -> Self {
        self.styled(StyleOp::MaxFrame {
            max_width: max_width.map(|w| w.max(0.0)),
            max_height: max_height.map(|h| h.max(0.0)),
            alignment: Alignment::CENTER,
        })
    }

    pub fn fill_max_size(self) -> Self {
        self.max_frame(Some(f32::INFINITY), Some(f32::INFINITY))
    }
}
