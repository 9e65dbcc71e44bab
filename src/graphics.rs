//! Drawing surface for laid-out text.
//!
//! [`Graphics`] is the small capability set the renderer needs from a
//! back-end: a current font, a current transformation, and a way to draw a
//! string at a position on its baseline. The provided methods lay text out
//! and render it, optionally rotated, and leave font and transformation as
//! they found them.

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::font::{Font, FontUtil};
use crate::fragment::{layout, Fragment, FragmentedText, LayoutOptions};
use crate::rich_text::RichText;
use crate::rotation::{
    block_transform, line_step, line_transform, translated_block_transform, AlignmentAxis,
    TextRotationMode,
};
use crate::trans_affine::AffineTransformation2f;
use crate::vector::Vector2f;

/// A text drawing back-end.
pub trait Graphics {
    /// Metrics matching the fonts this back-end draws with.
    fn font_util(&self) -> &dyn FontUtil;

    fn font(&self) -> &Font;

    fn set_font(&mut self, font: Font);

    /// Current user-to-device transformation.
    fn transformation(&self) -> AffineTransformation2f;

    fn set_transformation(&mut self, transformation: AffineTransformation2f);

    /// Draw `text` with the current font, starting at `(x, y)` on the
    /// baseline, in user space.
    fn draw_text(&mut self, text: &str, x: f32, y: f32);

    /// Draw every fragment of `text` relative to `pos`.
    fn render_fragments(&mut self, pos: Vector2f, text: &FragmentedText) {
        draw_fragments(self, pos, text.fragments());
    }

    /// Lay `text` out with the current font and draw it at `pos`.
    fn render_text(
        &mut self,
        pos: Vector2f,
        text: &RichText,
        options: &LayoutOptions,
    ) -> FragmentedText {
        let fragmented = layout(text, options, self.font_util(), self.font());
        self.render_fragments(pos, &fragmented);
        fragmented
    }

    /// Lay `text` out and draw it rotated by `angle` radians around `pos`.
    fn render_text_rotated(
        &mut self,
        pos: Vector2f,
        text: &RichText,
        options: &LayoutOptions,
        angle: f32,
        mode: TextRotationMode,
        axis: AlignmentAxis,
    ) -> Result<()> {
        let fragmented = layout(text, options, self.font_util(), self.font());
        self.render_fragments_rotated(pos, &fragmented, pos, angle, mode, axis)
    }

    /// Draw `text` at `pos`, rotated by `angle` radians around `pivot`.
    ///
    /// Fails with [`Error::InvalidRotationState`] for a non-finite angle;
    /// nothing is drawn in that case.
    fn render_fragments_rotated(
        &mut self,
        pos: Vector2f,
        text: &FragmentedText,
        pivot: Vector2f,
        angle: f32,
        mode: TextRotationMode,
        axis: AlignmentAxis,
    ) -> Result<()> {
        if !angle.is_finite() {
            return Err(Error::InvalidRotationState(format!(
                "angle {angle} is not finite"
            )));
        }
        debug!("render rotated text: angle {angle} around {pivot}, {mode:?}, {axis:?}");

        let saved = self.transformation();
        match mode {
            TextRotationMode::RotateBlock => {
                self.set_transformation(block_transform(angle, pivot).then(&saved));
                self.render_fragments(pos, text);
            }
            TextRotationMode::RotateAndTranslateBlock => {
                let transformation = translated_block_transform(angle, pivot, pos, text.bounds())?;
                self.set_transformation(transformation.then(&saved));
                self.render_fragments(pos, text);
            }
            TextRotationMode::RotateLines => {
                let step = line_step(angle, axis)?;
                let Some(top) = text.lines.iter().find_map(|l| l.first()).map(|f| f.y) else {
                    return Ok(());
                };
                for line in &text.lines {
                    let Some(first) = line.first() else {
                        continue;
                    };
                    let offset = first.y - top;
                    self.set_transformation(line_transform(angle, pivot, offset, step).then(&saved));
                    draw_fragments(self, pos, line.iter());
                }
            }
        }
        self.set_transformation(saved);
        Ok(())
    }
}

/// Draw `fragments` at `pos`, switching fonts only on change and restoring
/// the original font afterwards.
fn draw_fragments<'a, G, I>(g: &mut G, pos: Vector2f, fragments: I)
where
    G: Graphics + ?Sized,
    I: Iterator<Item = &'a Fragment>,
{
    let saved = g.font().clone();
    for f in fragments {
        if g.font() != &f.font {
            g.set_font(f.font.clone());
        }
        trace!("draw {:?} at ({}, {})", f.text, pos.x + f.x, pos.y + f.baseline_y());
        g.draw_text(&f.text, pos.x + f.x, pos.y + f.baseline_y());
    }
    if g.font() != &saved {
        g.set_font(saved);
    }
}

// ============================================================================
// RecordingGraphics
// ============================================================================

/// One recorded [`Graphics::draw_text`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub text: String,
    /// Baseline start in device space.
    pub position: Vector2f,
    pub font: Font,
    pub transformation: AffineTransformation2f,
}

/// A [`Graphics`] that records draw calls instead of rasterizing.
pub struct RecordingGraphics<F> {
    font_util: F,
    font: Font,
    transformation: AffineTransformation2f,
    commands: Vec<DrawCommand>,
}

impl<F: FontUtil> RecordingGraphics<F> {
    pub fn new(font_util: F, font: Font) -> Self {
        Self {
            font_util,
            font,
            transformation: AffineTransformation2f::IDENTITY,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Remove and return everything recorded so far.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl<F: FontUtil> Graphics for RecordingGraphics<F> {
    fn font_util(&self) -> &dyn FontUtil {
        &self.font_util
    }

    fn font(&self) -> &Font {
        &self.font
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn transformation(&self) -> AffineTransformation2f {
        self.transformation
    }

    fn set_transformation(&mut self, transformation: AffineTransformation2f) {
        self.transformation = transformation;
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand {
            text: text.to_string(),
            position: self.transformation.transform(Vector2f::new(x, y)),
            font: self.font.clone(),
            transformation: self.transformation,
        });
    }
}

// ============================================================================
// Tests
// ============================================================================
