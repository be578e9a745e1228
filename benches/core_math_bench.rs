use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use radar_rs::core::geometry::{self, GeometryConfig};
use radar_rs::core::path::{OutlineVertex, build_outline};
use radar_rs::core::scale::RadialScale;
use radar_rs::core::types::{AxisSpec, DatasetSpec};

fn ten_axes() -> Vec<AxisSpec> {
    (0..10)
        .map(|i| AxisSpec::new(format!("axis-{i}")).with_max_value(100.0 + i as f64))
        .collect()
}

fn bench_radial_scale_round_trip(c: &mut Criterion) {
    let scale = RadialScale::new(250.0, 140.0).expect("valid scale");

    c.bench_function("radial_scale_round_trip", |b| {
        b.iter(|| {
            let distance = scale.value_to_distance(187.5).expect("to distance");
            let _ = scale.distance_to_value(distance).expect("from distance");
        })
    });
}

fn bench_dataset_projection_10_axes(c: &mut Criterion) {
    let axes = ten_axes();
    let geometry = GeometryConfig::new(200.0, 200.0, 140.0, &axes).expect("valid geometry");
    let datasets: Vec<DatasetSpec> = (0..8)
        .map(|d| {
            let mut dataset = DatasetSpec::new(format!("dataset-{d}"));
            for (i, axis) in axes.iter().enumerate() {
                dataset = dataset.with_value(axis.label.clone(), (d * 10 + i) as f64);
            }
            dataset
        })
        .collect();

    c.bench_function("dataset_projection_8x10", |b| {
        b.iter(|| {
            for dataset in &datasets {
                let _ = geometry::project_dataset_points(
                    black_box(&axes),
                    black_box(dataset),
                    black_box(geometry),
                )
                .expect("projection should succeed");
            }
        })
    });
}

fn bench_smoothed_outline_10_vertices(c: &mut Criterion) {
    let points: Vec<OutlineVertex> = (0..10)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / 10.0 - std::f64::consts::FRAC_PI_2;
            let radius = if i % 2 == 0 { 140.0 } else { 90.0 };
            OutlineVertex::new(200.0 + radius * angle.cos(), 200.0 + radius * angle.sin())
        })
        .collect();
    let center = OutlineVertex::new(200.0, 200.0);

    c.bench_function("smoothed_outline_10_vertices", |b| {
        b.iter(|| {
            let _ = build_outline(black_box(&points), black_box(8.0), black_box(center));
        })
    });
}

criterion_group!(
    benches,
    bench_radial_scale_round_trip,
    bench_dataset_projection_10_axes,
    bench_smoothed_outline_10_vertices
);
criterion_main!(benches);
