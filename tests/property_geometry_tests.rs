use proptest::prelude::*;

use radar_rs::core::geometry::{self, GeometryConfig};
use radar_rs::core::path::{OutlineVertex, build_outline};
use radar_rs::core::types::{AxisSpec, DatasetSpec};

proptest! {
    #[test]
    fn projected_distance_matches_normalization(
        value in 0.0f64..10_000.0,
        max_value in 0.001f64..10_000.0,
        radius in 1.0f64..2_000.0,
        axis_count in 3usize..=10
    ) {
        let axes: Vec<AxisSpec> = (0..axis_count)
            .map(|i| AxisSpec::new(format!("axis-{i}")).with_max_value(max_value))
            .collect();
        let geometry = GeometryConfig::new(0.0, 0.0, radius, &axes).expect("valid geometry");
        let dataset = DatasetSpec::new("d").with_value("axis-0", value);

        let points = geometry::project_dataset_points(&axes, &dataset, geometry)
            .expect("projection");
        let distance = points[0].x.hypot(points[0].y);
        let expected = radius * value / max_value;

        prop_assert!((distance - expected).abs() <= 1e-6 * expected.max(1.0));
    }

    #[test]
    fn outline_is_always_closed(
        corner_radius in -50.0f64..50.0,
        vertex_count in 1usize..=10,
        seed_radius in 1.0f64..500.0
    ) {
        let points: Vec<OutlineVertex> = (0..vertex_count)
            .map(|i| {
                let angle = i as f64 * std::f64::consts::TAU / vertex_count as f64;
                OutlineVertex::new(seed_radius * angle.cos(), seed_radius * angle.sin())
            })
            .collect();

        let path = build_outline(&points, corner_radius, OutlineVertex::new(0.0, 0.0));
        prop_assert!(path.is_closed());
        let first_is_move_to = matches!(
            path.commands()[0],
            radar_rs::core::path::PathCommand::MoveTo { .. }
        );
        prop_assert!(first_is_move_to);
    }

    #[test]
    fn outline_controls_are_finite(
        corner_radius in -100.0f64..100.0,
        vertex_count in 3usize..=10
    ) {
        let points: Vec<OutlineVertex> = (0..vertex_count)
            .map(|i| {
                let angle = i as f64 * std::f64::consts::TAU / vertex_count as f64;
                let radius = if i % 2 == 0 { 120.0 } else { 35.0 };
                OutlineVertex::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();

        let path = build_outline(&points, corner_radius, OutlineVertex::new(0.0, 0.0));
        for command in path.commands() {
            if let radar_rs::core::path::PathCommand::QuadTo { cx, cy, x, y } = command {
                prop_assert!(cx.is_finite() && cy.is_finite() && x.is_finite() && y.is_finite());
            }
        }
    }
}
