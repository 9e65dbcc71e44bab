// Arc approximation through the public API: endpoint exactness, flag
// combinations, degenerate input, and path recording.

use textgeom::basics::deg2rad;
use textgeom::bezier_arc::{approximate_arc, PathSink};
use textgeom::error::Error;
use textgeom::path::{Path2f, PathSegment};
use textgeom::vector::Vector2f;

const EPS: f32 = 1e-4;

struct Collected {
    start: Option<Vector2f>,
    curves: Vec<[Vector2f; 3]>,
}

fn collect(
    start: Vector2f,
    end: Vector2f,
    radii: Vector2f,
    angle: f32,
    large_arc: bool,
    sweep: bool,
) -> Result<Collected, Error> {
    let mut first = None;
    let mut curves = Vec::new();
    approximate_arc(
        start,
        end,
        radii,
        angle,
        large_arc,
        sweep,
        |p| first = Some(p),
        |c1, c2, p| curves.push([c1, c2, p]),
    )?;
    Ok(Collected {
        start: first,
        curves,
    })
}

fn max_distance(a: &Collected, b: &Collected) -> f32 {
    let pts = |c: &Collected| -> Vec<Vector2f> { c.curves.iter().flatten().copied().collect() };
    let (pa, pb) = (pts(a), pts(b));
    if pa.len() != pb.len() {
        return f32::INFINITY;
    }
    pa.iter().zip(&pb).map(|(p, q)| p.distance(*q)).fold(0.0, f32::max)
}

#[test]
fn test_flag_combinations_are_distinct_and_exact() {
    let start = Vector2f::new(0.0, 0.0);
    let end = Vector2f::new(15.0, 5.0);
    let radii = Vector2f::new(20.0, 10.0);
    let angle = deg2rad(30.0);

    let mut arcs = Vec::new();
    for large_arc in [false, true] {
        for sweep in [false, true] {
            let arc = collect(start, end, radii, angle, large_arc, sweep).unwrap();
            assert_eq!(arc.start, Some(start));
            let last = arc.curves.last().unwrap()[2];
            assert!(last.distance(end) < EPS, "large {large_arc} sweep {sweep}: {last}");
            arcs.push(arc);
        }
    }
    for i in 0..arcs.len() {
        for j in (i + 1)..arcs.len() {
            assert!(max_distance(&arcs[i], &arcs[j]) > 1e-2, "arcs {i} and {j} coincide");
        }
    }
}

#[test]
fn test_large_arc_has_more_segments() {
    let start = Vector2f::new(0.0, 0.0);
    let end = Vector2f::new(10.0, 0.0);
    let radii = Vector2f::new(10.0, 10.0);
    let small = collect(start, end, radii, 0.0, false, true).unwrap();
    let large = collect(start, end, radii, 0.0, true, true).unwrap();
    assert!(large.curves.len() > small.curves.len());
}

#[test]
fn test_degenerate_radius_is_straight_line() {
    let start = Vector2f::new(0.0, 0.0);
    let end = Vector2f::new(6.0, 0.0);
    let arc = collect(start, end, Vector2f::new(0.0, 5.0), 0.0, false, false).unwrap();
    assert_eq!(arc.curves.len(), 1);
    for p in arc.curves[0] {
        assert!(p.y.abs() < EPS);
    }
    assert_eq!(arc.curves[0][2], end);
}

#[test]
fn test_degenerate_radius_too_small_fails() {
    let r = collect(
        Vector2f::new(0.0, 0.0),
        Vector2f::new(6.0, 0.0),
        Vector2f::new(0.0, 2.0),
        0.0,
        false,
        false,
    );
    assert!(matches!(r, Err(Error::UnsolvableArc { .. })));
}

#[test]
fn test_path_records_arc_as_curves() {
    let mut path = Path2f::new();
    path.move_to(Vector2f::new(0.0, 0.0));
    path.arc_to(Vector2f::new(20.0, 0.0), Vector2f::new(10.0, 10.0), 0.0, false, true)
        .unwrap();
    path.close_path();

    let segments = path.segments();
    assert!(matches!(segments[0], PathSegment::MoveTo(_)));
    assert!(segments[1..segments.len() - 1]
        .iter()
        .all(|s| matches!(s, PathSegment::CurveTo { .. })));
    assert_eq!(segments.last(), Some(&PathSegment::ClosePath));

    let end = segments[segments.len() - 2].end_point().unwrap();
    assert!(end.distance(Vector2f::new(20.0, 0.0)) < EPS);

    // Half circle of radius 10 through (10, ±10).
    let bounds = path.bounds().unwrap();
    assert!((bounds.height - 10.0).abs() < 0.5);
}
