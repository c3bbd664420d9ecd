use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(230, 41, 55);
    pub const GREEN: Color = Color::rgb(0, 228, 48);
    pub const BLUE: Color = Color::rgb(0, 121, 241);
    pub const BLANK: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(px: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Color::rgba(r, g, b, a)
    }
}

/// Compares the colour channels only; alpha is ignored.
pub fn compare_color(a: Color, b: Color) -> bool {
    a.r == b.r && a.g == b.g && a.b == b.b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_color_ignores_alpha() {
        assert!(compare_color(Color::rgba(10, 20, 30, 255), Color::rgba(10, 20, 30, 0)));
        assert!(compare_color(Color::BLACK, Color::BLANK));
    }

    #[test]
    fn test_compare_color_channels() {
        let base = Color::rgb(10, 20, 30);
        assert!(!compare_color(base, Color::rgb(11, 20, 30)));
        assert!(!compare_color(base, Color::rgb(10, 21, 30)));
        assert!(!compare_color(base, Color::rgb(10, 20, 31)));
    }

    #[test]
    fn test_from_pixel() {
        let color: Color = image::Rgba([1, 2, 3, 4]).into();
        assert_eq!(color, Color::rgba(1, 2, 3, 4));
    }
}
