//! 2D vector.
//!
//! `Vector2f` doubles as point and displacement; every coordinate, offset,
//! and control point in the crate is one.

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Immutable 2D point/vector with single-precision components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2f {
    pub x: f32,
    pub y: f32,
}

impl Vector2f {
    pub const ZERO: Vector2f = Vector2f { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at angle `a` (radians).
    #[inline]
    pub fn from_angle(a: f32) -> Self {
        let (s, c) = a.sin_cos();
        Self::new(c, s)
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn dot(self, other: Vector2f) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    #[inline]
    pub fn cross(self, other: Vector2f) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, other: Vector2f) -> f32 {
        (other - self).length()
    }

    /// Vector scaled to unit length, or `ZERO` for the null vector.
    pub fn normalized(self) -> Vector2f {
        let len = self.length();
        if len > 0.0 {
            self / len
        } else {
            Vector2f::ZERO
        }
    }

    /// Counter-clockwise perpendicular (in a y-up frame).
    #[inline]
    pub fn perpendicular(self) -> Vector2f {
        Vector2f::new(-self.y, self.x)
    }

    /// Angle to the positive x axis, in `(-π, π]`.
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Component-wise scaling.
    #[inline]
    pub fn scale(self, sx: f32, sy: f32) -> Vector2f {
        Vector2f::new(self.x * sx, self.y * sy)
    }

    /// Point halfway between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Vector2f) -> Vector2f {
        Vector2f::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    /// Linear interpolation; `t = 0` gives `self`, `t = 1` gives `other`.
    #[inline]
    pub fn lerp(self, other: Vector2f, t: f32) -> Vector2f {
        self + (other - self) * t
    }

    /// True when both components differ by at most `epsilon`.
    #[inline]
    pub fn is_close(self, other: Vector2f, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Vector2f) -> Vector2f {
        Vector2f::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Vector2f) -> Vector2f {
        Vector2f::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl Add for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn add(self, rhs: Vector2f) -> Vector2f {
        Vector2f::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2f {
    #[inline]
    fn add_assign(&mut self, rhs: Vector2f) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn sub(self, rhs: Vector2f) -> Vector2f {
        Vector2f::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2f {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector2f) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn neg(self) -> Vector2f {
        Vector2f::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn mul(self, s: f32) -> Vector2f {
        Vector2f::new(self.x * s, self.y * s)
    }
}

impl Div<f32> for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn div(self, s: f32) -> Vector2f {
        Vector2f::new(self.x / s, self.y / s)
    }
}

impl fmt::Display for Vector2f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f32, f32)> for Vector2f {
    fn from((x, y): (f32, f32)) -> Self {
        Vector2f::new(x, y)
    }
}

// ============================================================================
// Tests
// ============================================================================
