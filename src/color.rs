//! 8-bit RGBA color.
//!
//! Text color is carried on fonts and styles; the layout engine never
//! interprets it, so only construction and conversion live here.

use core::fmt;

/// Color with 8-bit red, green, blue, and alpha components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Rgba8 = Rgba8::new_opaque(0, 0, 0);
    pub const WHITE: Rgba8 = Rgba8::new_opaque(255, 255, 255);
    pub const GRAY: Rgba8 = Rgba8::new_opaque(128, 128, 128);
    pub const DARK_GRAY: Rgba8 = Rgba8::new_opaque(64, 64, 64);
    pub const RED: Rgba8 = Rgba8::new_opaque(255, 0, 0);
    pub const GREEN: Rgba8 = Rgba8::new_opaque(0, 128, 0);
    pub const BLUE: Rgba8 = Rgba8::new_opaque(0, 0, 255);
    pub const TRANSPARENT: Rgba8 = Rgba8::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn new_opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn with_opacity(c: &Rgba8, a: u8) -> Self {
        Self::new(c.r, c.g, c.b, a)
    }

    /// Color from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self::new(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    /// Packed `0xAARRGGBB` value.
    pub const fn argb(&self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Alpha as a value in `[0, 1]`.
    pub fn opacity(&self) -> f32 {
        self.a as f32 / 255.0
    }

    /// Fully transparent colors are not drawn by most back-ends.
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Formats as `#rrggbbaa`.
impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_roundtrip() {
        let c = Rgba8::from_argb(0x80112233);
        assert_eq!(c, Rgba8::new(0x11, 0x22, 0x33, 0x80));
        assert_eq!(c.argb(), 0x80112233);
    }

    #[test]
    fn test_opacity() {
        assert_eq!(Rgba8::BLACK.opacity(), 1.0);
        assert!(Rgba8::TRANSPARENT.is_transparent());
        assert_eq!(Rgba8::with_opacity(&Rgba8::RED, 0).a, 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgba8::GRAY.to_string(), "#808080ff");
    }
}
