//! Axis-aligned rectangles and dimensions.

use crate::vector::Vector2f;

/// Plain width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimension2f {
    pub width: f32,
    pub height: f32,
}

impl Dimension2f {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Dimension grown by `margin` on every side.
    pub fn add_margin(&self, margin: f32) -> Self {
        Self::new(self.width + 2.0 * margin, self.height + 2.0 * margin)
    }
}

/// Axis-aligned bounding box given by its minimum corner and its size.
///
/// Width and height are never negative: constructors normalize swapped
/// corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle2f {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle2f {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        let (x, width) = if width < 0.0 { (x + width, -width) } else { (x, width) };
        let (y, height) = if height < 0.0 { (y + height, -height) } else { (y, height) };
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle spanned by two arbitrary corner points.
    pub fn with_corners(a: Vector2f, b: Vector2f) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Rectangle at `position` with the given dimension.
    pub fn from_dimension(position: Vector2f, dimension: Dimension2f) -> Self {
        Self::new(position.x, position.y, dimension.width, dimension.height)
    }

    /// Smallest rectangle containing all `points`, or `None` for an empty
    /// iterator.
    pub fn bounding<I: IntoIterator<Item = Vector2f>>(points: I) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let (min, max) = it.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self::with_corners(min, max))
    }

    #[inline]
    pub fn x_min(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y_min(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn x_max(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn y_max(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn min(&self) -> Vector2f {
        Vector2f::new(self.x, self.y)
    }

    #[inline]
    pub fn max(&self) -> Vector2f {
        Vector2f::new(self.x_max(), self.y_max())
    }

    #[inline]
    pub fn center(&self) -> Vector2f {
        Vector2f::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[inline]
    pub fn dimension(&self) -> Dimension2f {
        Dimension2f::new(self.width, self.height)
    }

    /// Rectangle grown by `margin` on every side (shrunk for negative values,
    /// never below zero size).
    pub fn add_margin(&self, margin: f32) -> Self {
        let width = (self.width + 2.0 * margin).max(0.0);
        let height = (self.height + 2.0 * margin).max(0.0);
        let c = self.center();
        Self::new(c.x - width / 2.0, c.y - height / 2.0, width, height)
    }

    pub fn translate(&self, offset: Vector2f) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..*self
        }
    }

    /// True if `p` lies inside or on the border.
    pub fn contains(&self, p: Vector2f) -> bool {
        p.x >= self.x && p.x <= self.x_max() && p.y >= self.y && p.y <= self.y_max()
    }

    /// Bounding box of both rectangles.
    pub fn union(&self, other: &Rectangle2f) -> Self {
        Self::with_corners(self.min().min(other.min()), self.max().max(other.max()))
    }

    /// Overlapping part of both rectangles, or `None` if they are disjoint.
    pub fn intersection(&self, other: &Rectangle2f) -> Option<Self> {
        let min = self.min().max(other.min());
        let max = self.max().min(other.max());
        if min.x <= max.x && min.y <= max.y {
            Some(Self::with_corners(min, max))
        } else {
            None
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
