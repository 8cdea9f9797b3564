//! Clip shapes

use crate::geometry::{CornerRadii, Rect};

/// Shape used by clip and fill operations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Shape {
    #[default]
    Rectangle,
    RoundedRectangle {
        radius: f32,
    },
    /// Rounded ends with radius equal to half the shorter side.
    Capsule,
    Circle,
}

impl Shape {
    pub fn rounded(radius: f32) -> Self {
        Shape::RoundedRectangle {
            radius: radius.max(0.0),
        }
    }

    /// Resolves the shape against a concrete rect.
    pub fn resolve(&self, rect: Rect) -> CornerRadii {
        let half_short = rect.width.min(rect.height).max(0.0) / 2.0;
        match self {
            Shape::Rectangle => CornerRadii::default(),
            Shape::RoundedRectangle { radius } => CornerRadii::uniform(radius.min(half_short)),
            Shape::Capsule | Shape::Circle => CornerRadii::uniform(half_short),
        }
    }

    /// Returns the rect actually covered by the shape inside `rect`.
    ///
    /// Circles are centered squares; every other shape covers the whole rect.
    pub fn bounds(&self, rect: Rect) -> Rect {
        match self {
            Shape::Circle => {
                let side = rect.width.min(rect.height);
                Rect::new(
                    rect.x + (rect.width - side) / 2.0,
                    rect.y + (rect.height - side) / 2.0,
                    side,
                    side,
                )
            }
            _ => rect,
        }
    }
}
