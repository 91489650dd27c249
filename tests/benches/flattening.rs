extern crate sliderpath;
extern crate sliderpath_tests;
#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};
use sliderpath::algorithms::measure::{sample_uniformly, PathSampler, SampleType};
use sliderpath::geom::{approximate_catmull, approximate_circular_arc, BezierApproximator};
use sliderpath::math::{point, Point};
use sliderpath::path::{ApproximationOptions, PathBuilder, SliderPath};
use sliderpath_tests::*;

static TOLERANCES: [f64; 6] = [0.05, 0.1, 0.25, 0.5, 1.0, 2.0];

fn bezier_curves() -> Vec<Vec<Point>> {
    typical_control_points()
        .into_iter()
        .chain(generate_control_points(1, 50, 8))
        .map(|control_points| control_points.iter().map(|cp| cp.position).collect())
        .collect()
}

fn bezier_flatten(c: &mut Criterion) {
    let curves = bezier_curves();
    let mut approximator = BezierApproximator::new();
    let mut output = Vec::new();

    let mut g = c.benchmark_group("bezier");
    for tol in &TOLERANCES {
        g.bench_with_input(BenchmarkId::new("approximate", tol), tol, |b, tol| {
            b.iter(|| {
                for curve in &curves {
                    output.clear();
                    approximator.approximate(curve, 0, *tol, &mut output);
                    std::hint::black_box(&output);
                }
            })
        });
        g.bench_with_input(BenchmarkId::new("bspline3", tol), tol, |b, tol| {
            b.iter(|| {
                for curve in &curves {
                    output.clear();
                    approximator.approximate(curve, 3, *tol, &mut output);
                    std::hint::black_box(&output);
                }
            })
        });
    }
}

fn arc_flatten(c: &mut Criterion) {
    let arcs = [
        [point(100.0, 300.0), point(256.0, 80.0), point(412.0, 300.0)],
        [point(0.0, 0.0), point(10.0, 1.0), point(20.0, 0.0)],
        [point(200.0, 200.0), point(300.0, 100.0), point(200.0, 0.0)],
    ];
    let mut output = Vec::new();

    let mut g = c.benchmark_group("arc");
    for tol in &TOLERANCES {
        g.bench_with_input(BenchmarkId::new("approximate", tol), tol, |b, tol| {
            b.iter(|| {
                for arc in &arcs {
                    output.clear();
                    approximate_circular_arc(arc[0], arc[1], arc[2], *tol, &mut output);
                    std::hint::black_box(&output);
                }
            })
        });
    }
}

fn catmull_flatten(c: &mut Criterion) {
    let curves = bezier_curves();
    let mut output = Vec::new();

    c.bench_function("catmull", |b| {
        b.iter(|| {
            for curve in &curves {
                output.clear();
                approximate_catmull(curve, 50, &mut output);
                std::hint::black_box(&output);
            }
        })
    });
}

fn build_paths(c: &mut Criterion) {
    let control_points = generate_control_points(2, 100, 12);
    let mut builder = PathBuilder::new(ApproximationOptions::DEFAULT);

    c.bench_function("build paths", |b| {
        b.iter(|| {
            for cps in &control_points {
                let path = builder.build(cps, None).unwrap();
                std::hint::black_box(path);
            }
        })
    });
}

fn sample_paths(c: &mut Criterion) {
    let paths: Vec<SliderPath> = generate_control_points(3, 100, 12)
        .iter()
        .map(|cps| SliderPath::new(cps, None, ApproximationOptions::DEFAULT).unwrap())
        .collect();

    let mut g = c.benchmark_group("sample");
    g.bench_function("uniform", |b| {
        b.iter(|| {
            for path in &paths {
                std::hint::black_box(sample_uniformly(path, 100).unwrap());
            }
        })
    });
    g.bench_function("position_at", |b| {
        b.iter(|| {
            for path in &paths {
                for i in 0..=100 {
                    std::hint::black_box(path.position_at(i as f64 / 100.0).unwrap());
                }
            }
        })
    });
    g.bench_function("sampler", |b| {
        b.iter(|| {
            for path in &paths {
                let mut sampler = PathSampler::new(path, SampleType::Normalized);
                for i in 0..=100 {
                    std::hint::black_box(sampler.sample(i as f64 / 100.0).unwrap());
                }
            }
        })
    });
}

criterion_group!(flattening, bezier_flatten, arc_flatten, catmull_flatten);
criterion_group!(paths, build_paths, sample_paths);
criterion_main!(flattening, paths);
