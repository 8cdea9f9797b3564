//! Color definitions

/// Linear RGBA color with components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const CLEAR: Color = Color(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color(1.0, 0.23, 0.19, 1.0);
    pub const GREEN: Color = Color(0.2, 0.78, 0.35, 1.0);
    pub const BLUE: Color = Color(0.0, 0.48, 1.0, 1.0);
    pub const YELLOW: Color = Color(1.0, 0.8, 0.0, 1.0);
    pub const ORANGE: Color = Color(1.0, 0.58, 0.0, 1.0);
    pub const GRAY: Color = Color(0.56, 0.56, 0.58, 1.0);

    /// Default color for text when nothing in the environment overrides it.
    pub const PRIMARY: Color = Color::BLACK;
    /// Default tint for interactive controls such as buttons.
    pub const ACCENT: Color = Color::BLUE;

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color(r, g, b, a)
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Color(r, g, b, 1.0)
    }

    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub fn r(&self) -> f32 {
        self.0
    }

    pub fn g(&self) -> f32 {
        self.1
    }

    pub fn b(&self) -> f32 {
        self.2
    }

    pub fn a(&self) -> f32 {
        self.3
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Color(self.0, self.1, self.2, alpha.clamp(0.0, 1.0))
    }

    pub fn is_transparent(&self) -> bool {
        self.3 <= 0.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::PRIMARY
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn from_u8_normalizes_components() {
        let color = Color::from_rgba_u8(255, 0, 51, 255);
        assert_eq!(color, Color(1.0, 0.0, 0.2, 1.0));
    }

    #[test]
    fn with_alpha_clamps() {
        assert_eq!(Color::RED.with_alpha(3.0).a(), 1.0);
        assert!(Color::RED.with_alpha(-1.0).is_transparent());
    }
}
