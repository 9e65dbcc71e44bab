//! Path segment storage.
//!
//! `Path2f` records move/line/curve/close commands in absolute coordinates.
//! Elliptical arcs are converted to cubic Bezier curves on insertion, so a
//! stored path only ever contains the four primitive segment kinds a drawing
//! back-end has to understand.

use crate::arc::Arc2f;
use crate::bezier_arc::{approximate_arc2f, PathSink};
use crate::error::Result;
use crate::rect::Rectangle2f;
use crate::trans_affine::AffineTransformation2f;
use crate::vector::Vector2f;

/// A single path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Vector2f),
    LineTo(Vector2f),
    CurveTo {
        c1: Vector2f,
        c2: Vector2f,
        end: Vector2f,
    },
    ClosePath,
}

impl PathSegment {
    /// End point of the segment, `None` for `ClosePath`.
    pub fn end_point(&self) -> Option<Vector2f> {
        match *self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(p),
            PathSegment::CurveTo { end, .. } => Some(end),
            PathSegment::ClosePath => None,
        }
    }

    fn map(&self, t: &AffineTransformation2f) -> PathSegment {
        match *self {
            PathSegment::MoveTo(p) => PathSegment::MoveTo(t.transform(p)),
            PathSegment::LineTo(p) => PathSegment::LineTo(t.transform(p)),
            PathSegment::CurveTo { c1, c2, end } => PathSegment::CurveTo {
                c1: t.transform(c1),
                c2: t.transform(c2),
                end: t.transform(end),
            },
            PathSegment::ClosePath => PathSegment::ClosePath,
        }
    }
}

/// Recorded path consisting of one or more subpaths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path2f {
    segments: Vec<PathSegment>,
    /// Start of the current subpath, target of `close_path`.
    subpath_start: Option<Vector2f>,
}

impl Path2f {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Remove all segments.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.subpath_start = None;
    }

    /// The current point, i.e. the end of the last segment.
    pub fn current_point(&self) -> Option<Vector2f> {
        match self.segments.last()? {
            PathSegment::ClosePath => self.subpath_start,
            s => s.end_point(),
        }
    }

    /// Add an SVG-style elliptical arc from the current point to `end`.
    ///
    /// Without a current point this starts a new subpath at `end`.
    pub fn arc_to(
        &mut self,
        end: Vector2f,
        radii: Vector2f,
        angle: f32,
        large_arc: bool,
        sweep: bool,
    ) -> Result<()> {
        let Some(start) = self.current_point() else {
            self.move_to(end);
            return Ok(());
        };
        let arc = Arc2f::new(start, end, radii, angle, large_arc, sweep);
        let mut curves = ArcCollector::default();
        approximate_arc2f(&arc, &mut curves)?;
        self.segments.extend(curves.segments);
        Ok(())
    }

    /// Close the current subpath.
    pub fn close_path(&mut self) {
        if self.subpath_start.is_some() {
            self.segments.push(PathSegment::ClosePath);
        }
    }

    /// Bounding rectangle of all points, control points included.
    pub fn bounds(&self) -> Option<Rectangle2f> {
        Rectangle2f::bounding(self.segments.iter().flat_map(|s| {
            let pts: [Option<Vector2f>; 3] = match *s {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => [Some(p), None, None],
                PathSegment::CurveTo { c1, c2, end } => [Some(c1), Some(c2), Some(end)],
                PathSegment::ClosePath => [None, None, None],
            };
            pts.into_iter().flatten()
        }))
    }

    /// Copy of this path with every point mapped through `t`.
    pub fn transform(&self, t: &AffineTransformation2f) -> Path2f {
        Path2f {
            segments: self.segments.iter().map(|s| s.map(t)).collect(),
            subpath_start: self.subpath_start.map(|p| t.transform(p)),
        }
    }
}

impl PathSink for Path2f {
    fn move_to(&mut self, p: Vector2f) {
        self.segments.push(PathSegment::MoveTo(p));
        self.subpath_start = Some(p);
    }

    /// Without a current point this behaves like `move_to`.
    fn line_to(&mut self, p: Vector2f) {
        if self.current_point().is_none() {
            self.move_to(p);
        } else {
            self.segments.push(PathSegment::LineTo(p));
        }
    }

    fn curve_to(&mut self, c1: Vector2f, c2: Vector2f, end: Vector2f) {
        if self.current_point().is_none() {
            self.move_to(c1);
        }
        self.segments.push(PathSegment::CurveTo { c1, c2, end });
    }
}

/// Collects arc curves, dropping the leading `move_to` (the arc starts at the
/// path's current point).
#[derive(Default)]
struct ArcCollector {
    segments: Vec<PathSegment>,
}

impl PathSink for ArcCollector {
    fn move_to(&mut self, _p: Vector2f) {}

    fn line_to(&mut self, p: Vector2f) {
        self.segments.push(PathSegment::LineTo(p));
    }

    fn curve_to(&mut self, c1: Vector2f, c2: Vector2f, end: Vector2f) {
        self.segments.push(PathSegment::CurveTo { c1, c2, end });
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_basic_commands() {
        let mut p = Path2f::new();
        assert!(p.is_empty());
        assert_eq!(p.current_point(), None);
        p.move_to(Vector2f::new(1.0, 2.0));
        p.line_to(Vector2f::new(3.0, 4.0));
        p.curve_to(
            Vector2f::new(4.0, 4.0),
            Vector2f::new(5.0, 5.0),
            Vector2f::new(6.0, 4.0),
        );
        assert_eq!(p.segments().len(), 3);
        assert_eq!(p.current_point(), Some(Vector2f::new(6.0, 4.0)));
        p.close_path();
        assert_eq!(p.current_point(), Some(Vector2f::new(1.0, 2.0)));
    }

    #[test]
    fn test_line_to_without_current_point() {
        let mut p = Path2f::new();
        p.line_to(Vector2f::new(1.0, 1.0));
        assert_eq!(p.segments(), &[PathSegment::MoveTo(Vector2f::new(1.0, 1.0))]);
    }

    #[test]
    fn test_arc_to_appends_curves() {
        let mut p = Path2f::new();
        p.move_to(Vector2f::new(10.0, 0.0));
        p.arc_to(Vector2f::new(-10.0, 0.0), Vector2f::new(10.0, 10.0), 0.0, false, true)
            .unwrap();
        assert_eq!(p.segments().len(), 5);
        assert!(p.segments()[1..]
            .iter()
            .all(|s| matches!(s, PathSegment::CurveTo { .. })));
        assert_eq!(p.current_point(), Some(Vector2f::new(-10.0, 0.0)));
        let b = p.bounds().unwrap();
        assert!((b.x_min() + 10.0).abs() < 1e-4);
        assert!((b.x_max() - 10.0).abs() < 1e-4);
        assert!((b.y_max() - 10.0).abs() < 1e-3);
        assert!(b.y_min().abs() < 1e-4);
    }

    #[test]
    fn test_arc_to_without_current_point_moves() {
        let mut p = Path2f::new();
        p.arc_to(Vector2f::new(5.0, 5.0), Vector2f::new(1.0, 1.0), 0.0, false, false)
            .unwrap();
        assert_eq!(p.segments(), &[PathSegment::MoveTo(Vector2f::new(5.0, 5.0))]);
    }

    #[test]
    fn test_arc_to_unsolvable_leaves_path_unchanged() {
        let mut p = Path2f::new();
        p.move_to(Vector2f::ZERO);
        let r = p.arc_to(Vector2f::new(10.0, 0.0), Vector2f::new(0.0, 1.0), 0.0, false, false);
        assert!(matches!(r, Err(Error::UnsolvableArc { .. })));
        assert_eq!(p.segments().len(), 1);
    }

    #[test]
    fn test_transform() {
        let mut p = Path2f::new();
        p.move_to(Vector2f::new(1.0, 0.0));
        p.line_to(Vector2f::new(2.0, 0.0));
        let t = p.transform(&AffineTransformation2f::translate(0.0, 5.0));
        assert_eq!(t.current_point(), Some(Vector2f::new(2.0, 5.0)));
        assert_eq!(t.bounds(), Some(Rectangle2f::new(1.0, 5.0, 1.0, 0.0)));
    }
}
