use criterion::{black_box, criterion_group, criterion_main, Criterion};
use textgeom::bezier_arc::approximate_arc;
use textgeom::path::Path2f;
use textgeom::vector::Vector2f;

fn bench_approximate_arc(c: &mut Criterion) {
    c.bench_function("approximate_arc_large_rotated", |b| {
        b.iter(|| {
            let mut count = 0usize;
            approximate_arc(
                black_box(Vector2f::new(0.0, 0.0)),
                black_box(Vector2f::new(15.0, 5.0)),
                Vector2f::new(20.0, 10.0),
                0.5,
                true,
                true,
                |_| {},
                |_, _, _| count += 1,
            )
            .ok();
            black_box(count)
        })
    });
}

fn bench_path_arcs(c: &mut Criterion) {
    c.bench_function("path_arc_to_chain", |b| {
        b.iter(|| {
            let mut path = Path2f::new();
            let mut p = Vector2f::new(0.0, 0.0);
            path.arc_to(p, Vector2f::new(10.0, 10.0), 0.0, false, true).ok();
            for i in 0..500 {
                p = Vector2f::new(p.x + 10.0, if i % 2 == 0 { 5.0 } else { 0.0 });
                path.arc_to(p, Vector2f::new(8.0, 6.0), 0.3, i % 3 == 0, i % 2 == 0)
                    .ok();
            }
            black_box(path.segments().len())
        })
    });
}

criterion_group!(bezier_arc_benches, bench_approximate_arc, bench_path_arcs);
criterion_main!(bezier_arc_benches);
