//! Geometry of rotated text blocks.
//!
//! Three ways to rotate a laid-out block around a pivot:
//!
//! - [`TextRotationMode::RotateBlock`] rotates the finished block as a whole.
//! - [`TextRotationMode::RotateAndTranslateBlock`] additionally moves the
//!   rotated block so that its axis-aligned bounding box is anchored at the
//!   draw position the same way the unrotated block is.
//! - [`TextRotationMode::RotateLines`] rotates every line on its own and
//!   stacks the lines along the x or y axis, so that their starts stay
//!   aligned on a vertical or horizontal.
//!
//! Angles are in radians and normalized into `[0, 2π)` before the quadrant
//! or octant is selected. The selection happens once per block.

use crate::basics::{normalize_angle, FRAC_PI_2, FRAC_PI_4};
use crate::error::{Error, Result};
use crate::rect::{Dimension2f, Rectangle2f};
use crate::trans_affine::AffineTransformation2f;
use crate::vector::Vector2f;

/// Divisors below this make a forced line axis unusable.
const AXIS_EPSILON: f32 = 1e-6;

/// How a block of text is rotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextRotationMode {
    /// The laid-out block is rotated as a whole around the pivot.
    #[default]
    RotateBlock,
    /// The rotated block's bounding box is anchored at the draw position.
    /// Anchors apply proportionally to the rotated box: a baseline anchor
    /// places the box at the fraction of its height where the first
    /// baseline sat in the unrotated block.
    RotateAndTranslateBlock,
    /// Every line is rotated on its own and the lines are stacked along an
    /// axis.
    RotateLines,
}

/// Axis along which rotated lines are stacked in
/// [`TextRotationMode::RotateLines`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlignmentAxis {
    /// Derived from the octant of the angle.
    #[default]
    Automatic,
    /// Line starts share an x coordinate; lines step along y.
    XAxis,
    /// Line starts share a y coordinate; lines step along x.
    YAxis,
}

// ============================================================================
// Quadrant
// ============================================================================

/// Quarter of the circle a normalized angle falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
}

impl Quadrant {
    pub fn from_index(index: usize) -> Result<Self> {
        match index {
            0 => Ok(Quadrant::First),
            1 => Ok(Quadrant::Second),
            2 => Ok(Quadrant::Third),
            3 => Ok(Quadrant::Fourth),
            _ => Err(Error::InvalidRotationState(format!(
                "quadrant index {index} out of range"
            ))),
        }
    }

    /// Quadrant of `angle` after normalization.
    pub fn of(angle: f32) -> Result<Self> {
        Self::from_index(bucket(angle, FRAC_PI_2, 3)?)
    }

    /// Top-left corner of the bounding box of a `width` x `height` box with
    /// its top-left corner at the origin, rotated by an angle with the given
    /// sine and cosine. The angle must lie in this quadrant.
    pub fn bbox_min(self, width: f32, height: f32, sin: f32, cos: f32) -> Vector2f {
        match self {
            Quadrant::First => Vector2f::new(-height * sin, 0.0),
            Quadrant::Second => Vector2f::new(width * cos - height * sin, height * cos),
            Quadrant::Third => Vector2f::new(width * cos, width * sin + height * cos),
            Quadrant::Fourth => Vector2f::new(0.0, width * sin),
        }
    }
}

// ============================================================================
// Octant
// ============================================================================

/// Eighth of the circle a normalized angle falls into, `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Octant(u8);

impl Octant {
    pub fn from_index(index: usize) -> Result<Self> {
        if index < 8 {
            Ok(Octant(index as u8))
        } else {
            Err(Error::InvalidRotationState(format!(
                "octant index {index} out of range"
            )))
        }
    }

    /// Octant of `angle` after normalization.
    pub fn of(angle: f32) -> Result<Self> {
        Self::from_index(bucket(angle, FRAC_PI_4, 7)?)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// True for the octants closer to the x axis than to the y axis, where
    /// lines are stacked along y.
    pub fn near_x_axis(self) -> bool {
        matches!(self.0, 0 | 3 | 4 | 7)
    }
}

/// Index of the `width`-sized sector containing the normalized `angle`,
/// clamped to `max` against rounding at the upper end.
fn bucket(angle: f32, width: f32, max: usize) -> Result<usize> {
    if !angle.is_finite() {
        return Err(Error::InvalidRotationState(format!(
            "angle {angle} is not finite"
        )));
    }
    let a = normalize_angle(angle);
    Ok(((a / width) as usize).min(max))
}

// ============================================================================
// Transformations
// ============================================================================

/// Size of the axis-aligned bounding box of a rotated box.
pub fn rotated_dimension(width: f32, height: f32, angle: f32) -> Dimension2f {
    let (s, c) = angle.sin_cos();
    Dimension2f::new(
        width * c.abs() + height * s.abs(),
        width * s.abs() + height * c.abs(),
    )
}

/// Rotation of a whole block around `pivot`.
pub fn block_transform(angle: f32, pivot: Vector2f) -> AffineTransformation2f {
    AffineTransformation2f::rotate_around(angle, pivot)
}

/// Rotation around `pivot` of a block occupying `bounds` relative to `pos`,
/// followed by a translation that anchors the rotated bounding box at `pos`
/// the way `bounds` is anchored there unrotated.
///
/// The anchor is taken proportionally: a block whose first baseline sits at
/// `pos` has the rotated box placed at the same fraction of its height. At
/// angle 0 the result is the identity.
pub fn translated_block_transform(
    angle: f32,
    pivot: Vector2f,
    pos: Vector2f,
    bounds: Rectangle2f,
) -> Result<AffineTransformation2f> {
    let quadrant = Quadrant::of(angle)?;
    let (s, c) = normalize_angle(angle).sin_cos();
    let (w, h) = (bounds.width, bounds.height);

    let rotation = block_transform(angle, pivot);
    let min = rotation.transform(pos + bounds.min()) + quadrant.bbox_min(w, h, s, c);

    let rotated = rotated_dimension(w, h, angle);
    let fraction = |offset: f32, extent: f32| if extent > 0.0 { -offset / extent } else { 0.0 };
    let target = pos
        - Vector2f::new(
            fraction(bounds.x, w) * rotated.width,
            fraction(bounds.y, h) * rotated.height,
        );

    Ok(rotation.then(&AffineTransformation2f::translate_by(target - min)))
}

/// Offset between consecutive rotated lines per unit of unrotated line
/// distance.
pub fn line_step(angle: f32, axis: AlignmentAxis) -> Result<Vector2f> {
    let octant = Octant::of(angle)?;
    let (s, c) = normalize_angle(angle).sin_cos();
    let along_y = match axis {
        AlignmentAxis::Automatic => octant.near_x_axis(),
        AlignmentAxis::XAxis => c.abs() >= AXIS_EPSILON,
        AlignmentAxis::YAxis => s.abs() < AXIS_EPSILON,
    };
    Ok(if along_y {
        Vector2f::new(0.0, 1.0 / c)
    } else {
        Vector2f::new(-1.0 / s, 0.0)
    })
}

/// Transformation of a line whose top lies `offset` below the first line's
/// top: moved up to the first line, rotated around `pivot`, then moved by
/// `offset * step`.
pub fn line_transform(
    angle: f32,
    pivot: Vector2f,
    offset: f32,
    step: Vector2f,
) -> AffineTransformation2f {
    AffineTransformation2f::combine(&[
        AffineTransformation2f::translate(0.0, -offset),
        block_transform(angle, pivot),
        AffineTransformation2f::translate_by(step * offset),
    ])
}

// ============================================================================
// Tests
// ============================================================================
