//! Benchmarks for the geometry pipeline.
//!
//! The pipeline recomputes everything on every interaction tick, so these
//! numbers are per-tick costs.

use criterion::{criterion_group, criterion_main, Criterion};
use lathe::prelude::*;
use nalgebra::Point3;

fn vase_profile() -> Vec<Point3<f64>> {
    vec![
        Point3::new(0.5, -0.5, 0.0),
        Point3::new(0.8, -0.2, 0.0),
        Point3::new(0.6, 0.1, 0.0),
        Point3::new(0.4, 0.3, 0.0),
        Point3::new(0.5, 0.5, 0.0),
        Point3::new(0.7, 0.7, 0.0),
    ]
}

fn bench_refine(c: &mut Criterion) {
    let profile = vase_profile();

    c.bench_function("refine_depth_5", |b| {
        b.iter(|| refine_open_curve(&profile, 5))
    });

    c.bench_function("refine_depth_10", |b| {
        b.iter(|| refine_open_curve(&profile, 10))
    });
}

fn bench_revolve(c: &mut Criterion) {
    let curve = refine_open_curve(&vase_profile(), 5);
    let options = SweepOptions::default();

    c.bench_function("revolve_depth_5_curve", |b| {
        b.iter(|| revolve_profile(&curve, &options))
    });
}

fn bench_full_tick(c: &mut Criterion) {
    let mut session = SculptSession::new();
    for p in vase_profile() {
        session.add_point(p);
    }
    session.set_depth(5).unwrap();

    c.bench_function("session_rebuild_depth_5", |b| b.iter(|| session.rebuild()));

    session.set_weld(false);
    c.bench_function("session_rebuild_depth_5_unwelded", |b| {
        b.iter(|| session.rebuild())
    });
}

criterion_group!(benches, bench_refine, bench_revolve, bench_full_tick);
criterion_main!(benches);
