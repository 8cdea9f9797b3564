//! Pure math/data for drawing & units in viewkit
//!
//! This crate contains geometry primitives, color definitions, clip shapes,
//! and the font table used throughout the viewkit crates.

mod color;
mod geometry;
mod shape;
mod typography;

pub use color::*;
pub use geometry::*;
pub use shape::*;
pub use typography::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{CornerRadii, EdgeInsets, Point, Rect, Size};
    pub use crate::shape::Shape;
    pub use crate::typography::Font;
}
