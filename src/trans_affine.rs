//! Affine transformation matrix.
//!
//! 2D affine transformations: rotation, scaling, translation, and shearing.
//! Values are immutable; every operation returns a new matrix.

use crate::basics::is_equal_eps;
use crate::vector::Vector2f;

/// Epsilon for affine matrix comparisons.
pub const AFFINE_EPSILON: f32 = 1e-6;

/// 2D affine transformation matrix.
///
/// Stores six components: `[sx, shy, shx, sy, tx, ty]` representing the
/// matrix:
///
/// ```text
///   | sx  shx tx |
///   | shy  sy ty |
///   |  0    0  1 |
/// ```
///
/// Transform: `x' = x*sx + y*shx + tx`, `y' = x*shy + y*sy + ty`.
#[derive(Debug, Clone, Copy)]
pub struct AffineTransformation2f {
    pub sx: f32,
    pub shy: f32,
    pub shx: f32,
    pub sy: f32,
    pub tx: f32,
    pub ty: f32,
}

impl AffineTransformation2f {
    // ====================================================================
    // Construction
    // ====================================================================

    pub const IDENTITY: AffineTransformation2f = AffineTransformation2f {
        sx: 1.0,
        shy: 0.0,
        shx: 0.0,
        sy: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Custom matrix from six components.
    pub const fn new(sx: f32, shy: f32, shx: f32, sy: f32, tx: f32, ty: f32) -> Self {
        Self {
            sx,
            shy,
            shx,
            sy,
            tx,
            ty,
        }
    }

    /// Translation matrix.
    pub fn translate(x: f32, y: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// Translation by a vector.
    pub fn translate_by(v: Vector2f) -> Self {
        Self::translate(v.x, v.y)
    }

    /// Non-uniform scaling matrix.
    pub fn scale(x: f32, y: f32) -> Self {
        Self::new(x, 0.0, 0.0, y, 0.0, 0.0)
    }

    /// Rotation by `a` radians around the origin.
    pub fn rotate(a: f32) -> Self {
        let (sa, ca) = a.sin_cos();
        Self::new(ca, sa, -sa, ca, 0.0, 0.0)
    }

    /// Rotation by `a` radians around `pivot`.
    pub fn rotate_around(a: f32, pivot: Vector2f) -> Self {
        Self::combine(&[
            Self::translate(-pivot.x, -pivot.y),
            Self::rotate(a),
            Self::translate(pivot.x, pivot.y),
        ])
    }

    /// Shear matrix: `x' = x + shx*y`, `y' = y + shy*x`.
    pub fn shear(shx: f32, shy: f32) -> Self {
        Self::new(1.0, shy, shx, 1.0, 0.0, 0.0)
    }

    // ====================================================================
    // Composition
    // ====================================================================

    /// Compose: the result applies `self` first, then `m`.
    pub fn then(&self, m: &AffineTransformation2f) -> Self {
        Self {
            sx: self.sx * m.sx + self.shy * m.shx,
            shx: self.shx * m.sx + self.sy * m.shx,
            tx: self.tx * m.sx + self.ty * m.shx + m.tx,
            shy: self.sx * m.shy + self.shy * m.sy,
            sy: self.shx * m.shy + self.sy * m.sy,
            ty: self.tx * m.shy + self.ty * m.sy + m.ty,
        }
    }

    /// Compose a sequence of transformations applied left to right.
    ///
    /// `combine(&[a, b, c])` maps a point through `a`, then `b`, then `c`.
    /// An empty slice yields the identity.
    pub fn combine(transforms: &[AffineTransformation2f]) -> Self {
        transforms
            .iter()
            .fold(Self::IDENTITY, |acc, t| acc.then(t))
    }

    /// Inverse matrix, or `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let d = 1.0 / det;
        let sx = self.sy * d;
        let sy = self.sx * d;
        let shy = -self.shy * d;
        let shx = -self.shx * d;
        let tx = -self.tx * sx - self.ty * shx;
        let ty = -self.tx * shy - self.ty * sy;
        Some(Self {
            sx,
            shy,
            shx,
            sy,
            tx,
            ty,
        })
    }

    // ====================================================================
    // Transformations
    // ====================================================================

    /// Forward transform of a point.
    #[inline]
    pub fn transform(&self, p: Vector2f) -> Vector2f {
        Vector2f::new(
            p.x * self.sx + p.y * self.shx + self.tx,
            p.x * self.shy + p.y * self.sy + self.ty,
        )
    }

    /// Forward transform of a displacement (2x2 only, no translation).
    #[inline]
    pub fn transform_vector(&self, v: Vector2f) -> Vector2f {
        Vector2f::new(v.x * self.sx + v.y * self.shx, v.x * self.shy + v.y * self.sy)
    }

    // ====================================================================
    // Auxiliary
    // ====================================================================

    /// Determinant of the 2x2 portion.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.sx * self.sy - self.shy * self.shx
    }

    /// Extract the translation components.
    pub fn translation(&self) -> Vector2f {
        Vector2f::new(self.tx, self.ty)
    }

    /// Rotation angle of the transformed x axis.
    pub fn rotation(&self) -> f32 {
        self.shy.atan2(self.sx)
    }

    /// Check if this is an identity matrix.
    pub fn is_identity(&self, epsilon: f32) -> bool {
        self.is_equal(&Self::IDENTITY, epsilon)
    }

    /// Check if two matrices are equal within epsilon.
    pub fn is_equal(&self, m: &AffineTransformation2f, epsilon: f32) -> bool {
        is_equal_eps(self.sx, m.sx, epsilon)
            && is_equal_eps(self.shy, m.shy, epsilon)
            && is_equal_eps(self.shx, m.shx, epsilon)
            && is_equal_eps(self.sy, m.sy, epsilon)
            && is_equal_eps(self.tx, m.tx, epsilon)
            && is_equal_eps(self.ty, m.ty, epsilon)
    }
}

impl Default for AffineTransformation2f {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for AffineTransformation2f {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other, AFFINE_EPSILON)
    }
}

/// `a * b` applies `a` first, then `b`.
impl std::ops::Mul for AffineTransformation2f {
    type Output = AffineTransformation2f;
    fn mul(self, rhs: AffineTransformation2f) -> AffineTransformation2f {
        self.then(&rhs)
    }
}

// ============================================================================
// Tests
// ============================================================================
