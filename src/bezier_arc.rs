//! Elliptical arc to cubic Bezier approximation.
//!
//! Converts an SVG-style arc (endpoints, radii, rotation, large-arc and sweep
//! flags) into consecutive cubic Bezier segments. The ellipse is mapped onto
//! the unit circle, the circle center is solved from the perpendicular
//! bisector of the two endpoints, and the swept angle is cut into pieces of
//! at most 45°, which keeps the deviation from the true arc far below a
//! pixel even at 4K resolutions.

use log::{debug, trace, warn};

use crate::arc::Arc2f;
use crate::basics::{FRAC_PI_4, PI, TAU};
use crate::error::{Error, Result};
use crate::trans_affine::AffineTransformation2f;
use crate::vector::Vector2f;

/// Largest angle covered by a single cubic segment.
pub const MAX_SEGMENT_ANGLE: f32 = FRAC_PI_4;

/// Slack for angle comparisons; keeps exact multiples of 45° from
/// producing an extra, empty segment.
const ARC_ANGLE_EPSILON: f32 = 1e-4;

/// Receiver of path construction commands.
pub trait PathSink {
    fn move_to(&mut self, p: Vector2f);
    fn line_to(&mut self, p: Vector2f);
    fn curve_to(&mut self, c1: Vector2f, c2: Vector2f, end: Vector2f);
}

/// Adapts a pair of closures to [`PathSink`].
struct FnSink<M, C> {
    move_to: M,
    curve_to: C,
}

impl<M, C> PathSink for FnSink<M, C>
where
    M: FnMut(Vector2f),
    C: FnMut(Vector2f, Vector2f, Vector2f),
{
    fn move_to(&mut self, p: Vector2f) {
        (self.move_to)(p);
    }

    fn line_to(&mut self, p: Vector2f) {
        (self.curve_to)(p, p, p);
    }

    fn curve_to(&mut self, c1: Vector2f, c2: Vector2f, end: Vector2f) {
        (self.curve_to)(c1, c2, end);
    }
}

/// Control points of a unit-circle arc starting at angle `a` and sweeping
/// `delta` radians (`|delta| <= 90°` for good accuracy).
///
/// Returns `[p0, c1, c2, p3]`.
pub fn unit_arc_segment(a: f32, delta: f32) -> [Vector2f; 4] {
    let k = 4.0 / 3.0 * (delta / 4.0).tan();
    let p0 = Vector2f::from_angle(a);
    let p3 = Vector2f::from_angle(a + delta);
    [
        p0,
        p0 + p0.perpendicular() * k,
        p3 - p3.perpendicular() * k,
        p3,
    ]
}

/// Approximate an SVG arc, reporting the result through callbacks.
///
/// `move_to` is called once with `start`; `curve_to` receives the two
/// control points and the end point of every cubic segment. The last end
/// point is exactly `end`.
///
/// Fails with [`Error::UnsolvableArc`] when the arc degenerates to a line
/// (a zero radius or coinciding endpoints) but the endpoints are farther
/// apart than twice the larger radius.
#[allow(clippy::too_many_arguments)]
pub fn approximate_arc<M, C>(
    start: Vector2f,
    end: Vector2f,
    radii: Vector2f,
    angle: f32,
    large_arc: bool,
    sweep: bool,
    move_to: M,
    curve_to: C,
) -> Result<()>
where
    M: FnMut(Vector2f),
    C: FnMut(Vector2f, Vector2f, Vector2f),
{
    let arc = Arc2f::new(start, end, radii, angle, large_arc, sweep);
    approximate_arc2f(&arc, &mut FnSink { move_to, curve_to })
}

/// Approximate `arc` into `sink`.
///
/// Emits one `move_to(arc.start)` followed by `curve_to` calls only.
pub fn approximate_arc2f<S: PathSink + ?Sized>(arc: &Arc2f, sink: &mut S) -> Result<()> {
    let start = arc.start;
    let end = arc.end;
    let mut rx = arc.rx.abs();
    let mut ry = arc.ry.abs();

    if rx == 0.0 || ry == 0.0 || start == end {
        let distance = start.distance(end);
        if distance > 2.0 * rx.max(ry) {
            return Err(Error::UnsolvableArc {
                start,
                end,
                rx: arc.rx,
                ry: arc.ry,
            });
        }
        debug!("degenerate arc {} -> {}, emitting straight segment", start, end);
        sink.move_to(start);
        sink.curve_to(start.lerp(end, 1.0 / 3.0), start.lerp(end, 2.0 / 3.0), end);
        return Ok(());
    }

    // Map the ellipse onto the unit circle.
    let normalize = |rx: f32, ry: f32| {
        AffineTransformation2f::rotate(-arc.angle)
            .then(&AffineTransformation2f::scale(1.0 / rx, 1.0 / ry))
    };
    let mut to_unit = normalize(rx, ry);
    let mut p0 = to_unit.transform(start);
    let mut p1 = to_unit.transform(end);

    // Radii too small to reach both points: grow them uniformly until the
    // endpoints lie on a diameter.
    let lambda = ((p1 - p0) * 0.5).length_squared();
    let scaled = lambda > 1.0;
    if scaled {
        let f = lambda.sqrt();
        debug!("arc radii ({}, {}) too small, scaling by {}", rx, ry, f);
        rx *= f;
        ry *= f;
        to_unit = normalize(rx, ry);
        p0 = to_unit.transform(start);
        p1 = to_unit.transform(end);
    }

    let from_unit = to_unit.inverse().ok_or(Error::UnsolvableArc {
        start,
        end,
        rx: arc.rx,
        ry: arc.ry,
    })?;

    // Center on the perpendicular bisector; the discriminant is clamped
    // because diametrically opposed points round to slightly below zero.
    // Scaled radii put the endpoints on a diameter exactly.
    let half = (p1 - p0) * 0.5;
    let h = if scaled {
        0.0
    } else {
        (1.0 - half.length_squared()).max(0.0).sqrt()
    };
    let sign = if arc.sweep != arc.large_arc { 1.0 } else { -1.0 };
    let center = p0.midpoint(p1) + half.normalized().perpendicular() * (sign * h);

    let a0 = (p0 - center).angle();
    let a1 = (p1 - center).angle();
    let mut delta = a1 - a0;
    if arc.sweep && delta < 0.0 {
        delta += TAU;
    } else if !arc.sweep && delta > 0.0 {
        delta -= TAU;
    }
    if (delta.abs() > PI) != arc.large_arc && (delta.abs() - PI).abs() > ARC_ANGLE_EPSILON {
        warn!(
            "arc sweep {} contradicts large-arc flag {}, using complement",
            delta, arc.large_arc
        );
        delta = delta.signum() * (TAU - delta.abs());
    }

    let segments = ((delta.abs() / MAX_SEGMENT_ANGLE - ARC_ANGLE_EPSILON).ceil() as usize).max(1);
    let step = delta / segments as f32;
    trace!("arc sweep {} rad split into {} segments", delta, segments);

    sink.move_to(start);
    for i in 0..segments {
        let [_, c1, c2, p3] = unit_arc_segment(a0 + step * i as f32, step);
        let c1 = from_unit.transform(center + c1);
        let c2 = from_unit.transform(center + c2);
        let p3 = if i + 1 == segments {
            end
        } else {
            from_unit.transform(center + p3)
        };
        sink.curve_to(c1, c2, p3);
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
