//! SVG-style elliptical arc value type.

use crate::vector::Vector2f;

/// One elliptical arc command in SVG endpoint parameterization.
///
/// The arc runs from `start` to `end` on an ellipse with radii `rx`/`ry`
/// whose x axis is rotated by `angle` radians. `large_arc` selects the arc
/// spanning more than 180°, `sweep` the direction of positive angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc2f {
    pub start: Vector2f,
    pub end: Vector2f,
    pub rx: f32,
    pub ry: f32,
    pub angle: f32,
    pub large_arc: bool,
    pub sweep: bool,
}

impl Arc2f {
    pub fn new(
        start: Vector2f,
        end: Vector2f,
        radii: Vector2f,
        angle: f32,
        large_arc: bool,
        sweep: bool,
    ) -> Self {
        Self {
            start,
            end,
            rx: radii.x,
            ry: radii.y,
            angle,
            large_arc,
            sweep,
        }
    }

    /// Radii as a vector `(rx, ry)`.
    pub fn radii(&self) -> Vector2f {
        Vector2f::new(self.rx, self.ry)
    }

    /// True when the arc collapses to a straight line: a zero radius or
    /// coinciding endpoints.
    pub fn is_degenerate(&self) -> bool {
        self.rx == 0.0 || self.ry == 0.0 || self.start == self.end
    }

    /// The same arc traversed from `end` back to `start`.
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            sweep: !self.sweep,
            ..*self
        }
    }
}
