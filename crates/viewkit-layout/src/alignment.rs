//! Alignment along one or both axes.

/// Cross-axis alignment for children of a vertical stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    Leading,
    #[default]
    Center,
    Trailing,
}

impl HorizontalAlignment {
    /// Offset of a child of `size` inside `available` space.
    ///
    /// The offset goes negative when the child is larger than `available`.
    pub fn align(&self, available: f32, size: f32) -> f32 {
        let free = available - size;
        match self {
            HorizontalAlignment::Leading => 0.0,
            HorizontalAlignment::Center => free / 2.0,
            HorizontalAlignment::Trailing => free,
        }
    }
}

/// Cross-axis alignment for children of a horizontal stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerticalAlignment {
    Top,
    #[default]
    Center,
    Bottom,
}

impl VerticalAlignment {
    /// Offset of a child of `size` inside `available` space.
    pub fn align(&self, available: f32, size: f32) -> f32 {
        let free = available - size;
        match self {
            VerticalAlignment::Top => 0.0,
            VerticalAlignment::Center => free / 2.0,
            VerticalAlignment::Bottom => free,
        }
    }
}

/// Two-dimensional alignment used by frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Alignment {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
}

impl Alignment {
    pub const CENTER: Alignment = Alignment {
        horizontal: HorizontalAlignment::Center,
        vertical: VerticalAlignment::Center,
    };
}
