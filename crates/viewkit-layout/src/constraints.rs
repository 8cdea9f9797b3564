//! Layout constraints system

use viewkit_graphics::EdgeInsets;

/// Constraints used during layout measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    /// Creates constraints with exact width and height.
    pub fn tight(width: f32, height: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Creates constraints with loose bounds (min = 0, max = given values).
    pub fn loose(max_width: f32, max_height: f32) -> Self {
        Self {
            min_width: 0.0,
            max_width,
            min_height: 0.0,
            max_height,
        }
    }

    /// Constraints that accept any size.
    pub fn unbounded() -> Self {
        Self::loose(f32::INFINITY, f32::INFINITY)
    }

    /// Returns true if these constraints have a single size that satisfies them.
    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    /// Returns true if all bounds are finite.
    pub fn is_bounded(&self) -> bool {
        self.max_width.is_finite() && self.max_height.is_finite()
    }

    /// Constrains the provided width and height to fit within these constraints.
    pub fn constrain(&self, width: f32, height: f32) -> (f32, f32) {
        (
            width.clamp(self.min_width, self.max_width),
            height.clamp(self.min_height, self.max_height),
        )
    }

    /// Shrinks the maximum bounds by the insets, never below zero.
    pub fn deflate(&self, insets: EdgeInsets) -> Self {
        let horizontal = insets.horizontal_sum();
        let vertical = insets.vertical_sum();
        Self {
            min_width: (self.min_width - horizontal).max(0.0),
            max_width: (self.max_width - horizontal).max(0.0),
            min_height: (self.min_height - vertical).max(0.0),
            max_height: (self.max_height - vertical).max(0.0),
        }
    }

    /// Drops the minimum bounds.
    pub fn loosen(&self) -> Self {
        Self::loose(self.max_width, self.max_height)
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deflate_never_goes_negative() {
        let constraints = Constraints::loose(10.0, 100.0).deflate(EdgeInsets::uniform(8.0));
        assert_eq!(constraints.max_width, 0.0);
        assert_eq!(constraints.max_height, 84.0);
    }

    #[test]
    fn infinite_bounds_survive_deflate() {
        let constraints = Constraints::unbounded().deflate(EdgeInsets::uniform(8.0));
        assert!(!constraints.is_bounded());
    }

    #[test]
    fn tight_constrains_to_exact_size() {
        let constraints = Constraints::tight(20.0, 30.0);
        assert!(constraints.is_tight());
        assert_eq!(constraints.constrain(5.0, 500.0), (20.0, 30.0));
    }
}
