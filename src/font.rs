//! Fonts and font metrics.
//!
//! The layout engine never rasterizes glyphs. It only needs the extent of a
//! piece of text in a given font, which it obtains from a [`FontUtil`]
//! supplied by the drawing back-end.

use crate::color::Rgba8;
use crate::rect::Rectangle2f;
use crate::rich_text::Style;

/// Default family used when none is given.
pub const DEFAULT_FAMILY: &str = "SansSerif";
/// Default size in points.
pub const DEFAULT_SIZE: f32 = 12.0;

/// A fully resolved font.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike_through: bool,
    pub color: Rgba8,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
            italic: false,
            underline: false,
            strike_through: false,
            color: Rgba8::BLACK,
        }
    }

    /// Font with every attribute set in `style` replaced.
    pub fn derive(&self, style: &Style) -> Font {
        Font {
            family: style.family.clone().unwrap_or_else(|| self.family.clone()),
            size: style.size.unwrap_or(self.size),
            bold: style.bold.unwrap_or(self.bold),
            italic: style.italic.unwrap_or(self.italic),
            underline: style.underline.unwrap_or(self.underline),
            strike_through: style.strike_through.unwrap_or(self.strike_through),
            color: style.color.unwrap_or(self.color),
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(DEFAULT_FAMILY, DEFAULT_SIZE)
    }
}

/// Text measurement capability of a drawing back-end.
///
/// Implementations must be safe to call from several layouts at once if
/// layouts run on several threads.
pub trait FontUtil {
    /// Bounds of `text` rendered in `font`, relative to the text origin on
    /// the baseline.
    ///
    /// `y_min()` is the negated ascent and `y_max()` the descent, so the
    /// height covers the full line extent of the font, also for empty or
    /// whitespace-only text. `width` is the advance width.
    fn text_bounds(&self, text: &str, font: &Font) -> Rectangle2f;

    /// Resolve `style` against `base`.
    fn derive_font(&self, base: &Font, style: &Style) -> Font {
        base.derive(style)
    }
}

impl<T: FontUtil + ?Sized> FontUtil for &T {
    fn text_bounds(&self, text: &str, font: &Font) -> Rectangle2f {
        (**self).text_bounds(text, font)
    }

    fn derive_font(&self, base: &Font, style: &Style) -> Font {
        (**self).derive_font(base, style)
    }
}

/// Deterministic metrics that need no font files.
///
/// Every character advances by `advance * size` (widened by `bold_factor`
/// for bold fonts); ascent and descent are fixed fractions of the size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    pub advance: f32,
    pub ascent: f32,
    pub descent: f32,
    pub bold_factor: f32,
}

impl FixedMetrics {
    pub const fn new(advance: f32, ascent: f32, descent: f32) -> Self {
        Self {
            advance,
            ascent,
            descent,
            bold_factor: 1.0,
        }
    }

    /// Advance width of one character.
    pub fn char_width(&self, font: &Font) -> f32 {
        let w = self.advance * font.size;
        if font.bold {
            w * self.bold_factor
        } else {
            w
        }
    }

    /// Line height (ascent plus descent).
    pub fn line_height(&self, font: &Font) -> f32 {
        (self.ascent + self.descent) * font.size
    }
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            advance: 0.5,
            ascent: 0.8,
            descent: 0.2,
            bold_factor: 1.1,
        }
    }
}

impl FontUtil for FixedMetrics {
    fn text_bounds(&self, text: &str, font: &Font) -> Rectangle2f {
        let width = text.chars().count() as f32 * self.char_width(font);
        Rectangle2f::new(0.0, -self.ascent * font.size, width, self.line_height(font))
    }
}

// ============================================================================
// Tests
// ============================================================================
