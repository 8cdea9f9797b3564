//! Font table and deterministic text metrics

use crate::geometry::Size;

const GLYPH_WIDTH_RATIO: f32 = 0.5;
const LINE_HEIGHT_RATIO: f32 = 1.25;

/// Semantic text styles mapped to point sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Font {
    LargeTitle,
    Title,
    Headline,
    #[default]
    Body,
    Caption,
    Custom(f32),
}

impl Font {
    pub fn point_size(&self) -> f32 {
        match self {
            Font::LargeTitle => 34.0,
            Font::Title => 28.0,
            Font::Headline | Font::Body => 17.0,
            Font::Caption => 12.0,
            Font::Custom(size) => size.max(0.0),
        }
    }

    /// Measures a single line of text.
    pub fn measure(&self, text: &str) -> Size {
        let size = self.point_size();
        Size {
            width: text.chars().count() as f32 * size * GLYPH_WIDTH_RATIO,
            height: size * LINE_HEIGHT_RATIO,
        }
    }
}
