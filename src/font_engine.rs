//! TrueType font metrics using `ttf-parser`.
//!
//! Provides a [`FontUtil`] backed by a real font face: advance widths with
//! pair kerning, and the face's ascender/descender scaled to the requested
//! size. A single face serves every family; bold and italic variants are
//! measured with the regular outlines.

use crate::error::{Error, Result};
use crate::font::{Font, FontUtil};
use crate::rect::Rectangle2f;

/// TrueType/OpenType metrics provider.
pub struct TtfFontUtil {
    /// Owned font data bytes.
    face_data: Vec<u8>,
    /// Font face index (for font collections).
    face_index: u32,
    units_per_em: f32,
    ascender: f32,
    descender: f32,
}

impl TtfFontUtil {
    /// Create a metrics provider from raw TTF/OTF data.
    ///
    /// `face_index` selects the face in a font collection (use 0 for single
    /// fonts).
    pub fn from_data(data: Vec<u8>, face_index: u32) -> Result<Self> {
        let (units_per_em, ascender, descender) = {
            let face = ttf_parser::Face::parse(&data, face_index)
                .map_err(|e| Error::Font(format!("failed to parse font: {e:?}")))?;
            (
                face.units_per_em() as f32,
                face.ascender() as f32,
                face.descender() as f32,
            )
        };
        Ok(Self {
            face_data: data,
            face_index,
            units_per_em,
            ascender,
            descender,
        })
    }

    /// Ascender in font units.
    pub fn ascender(&self) -> f32 {
        self.ascender
    }

    /// Descender in font units (typically negative).
    pub fn descender(&self) -> f32 {
        self.descender
    }

    /// Advance width of `text` at `size`, including kerning.
    pub fn advance(&self, text: &str, size: f32) -> f32 {
        let Ok(face) = ttf_parser::Face::parse(&self.face_data, self.face_index) else {
            return 0.0;
        };
        let scale = size / self.units_per_em;
        let mut width = 0.0;
        let mut prev: Option<ttf_parser::GlyphId> = None;
        for ch in text.chars() {
            let Some(glyph) = face.glyph_index(ch) else {
                prev = None;
                continue;
            };
            width += face.glyph_hor_advance(glyph).unwrap_or(0) as f32;
            if let Some(p) = prev {
                width += kerning(&face, p, glyph);
            }
            prev = Some(glyph);
        }
        width * scale
    }
}

/// Horizontal kerning between two glyphs in font units.
fn kerning(face: &ttf_parser::Face<'_>, first: ttf_parser::GlyphId, second: ttf_parser::GlyphId) -> f32 {
    if let Some(kern) = face.tables().kern {
        for subtable in kern.subtables {
            if subtable.horizontal && !subtable.has_cross_stream {
                if let Some(value) = subtable.glyphs_kerning(first, second) {
                    return value as f32;
                }
            }
        }
    }
    0.0
}

impl FontUtil for TtfFontUtil {
    fn text_bounds(&self, text: &str, font: &Font) -> Rectangle2f {
        let scale = font.size / self.units_per_em;
        let ascent = self.ascender * scale;
        let descent = -self.descender * scale;
        Rectangle2f::new(0.0, -ascent, self.advance(text, font.size), ascent + descent)
    }
}

// ============================================================================
// Tests
// ============================================================================
