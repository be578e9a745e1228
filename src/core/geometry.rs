use std::f64::consts::{FRAC_PI_2, TAU};

use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::scale::RadialScale;
use crate::core::types::{AxisSpec, DatasetSpec, ProjectedPoint};
use crate::error::{ChartError, ChartResult};

/// Chart-wide maximum assumed for axes without an explicit ceiling.
pub const DEFAULT_AXIS_MAX: f64 = 100.0;
/// Concentric grid rings drawn per chart.
pub const GRID_RING_LEVELS: usize = 5;
/// Tick count of the zoomed ruler drawn along a highlighted axis.
pub const AXIS_RULER_TICKS: usize = 6;
/// Gap between the axis rim and its label anchor, in pixels.
pub const AXIS_LABEL_OFFSET: f64 = 20.0;

/// Pixel-space frame every projection runs against. Recomputed whenever
/// width, axis count, or legend visibility changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub chart_wide_max: f64,
}

impl GeometryConfig {
    pub fn new(center_x: f64, center_y: f64, radius: f64, axes: &[AxisSpec]) -> ChartResult<Self> {
        if !center_x.is_finite() || !center_y.is_finite() {
            return Err(ChartError::InvalidData(
                "chart center must be finite".to_owned(),
            ));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "chart radius must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            center_x,
            center_y,
            radius,
            chart_wide_max: chart_wide_max(axes),
        })
    }

    fn effective_max(self, axis: &AxisSpec) -> f64 {
        axis.max_value.unwrap_or(self.chart_wide_max)
    }
}

/// Largest per-axis ceiling across the chart; axes without one count as 100.
#[must_use]
pub fn chart_wide_max(axes: &[AxisSpec]) -> f64 {
    axes.iter()
        .map(|axis| OrderedFloat(axis.max_value.unwrap_or(DEFAULT_AXIS_MAX)))
        .max()
        .map_or(DEFAULT_AXIS_MAX, f64::from)
}

/// Angular position of axis `index` out of `count`: axis 0 due north,
/// advancing clockwise.
#[must_use]
pub fn axis_angle(index: usize, count: usize) -> f64 {
    index as f64 * TAU / count as f64 - FRAC_PI_2
}

/// Projects one dataset into its polygon vertices, one per axis in axis
/// order. Values missing from the dataset read as 0; values above the axis
/// ceiling project beyond the radius, unclamped.
pub fn project_dataset_points(
    axes: &[AxisSpec],
    dataset: &DatasetSpec,
    geometry: GeometryConfig,
) -> ChartResult<SmallVec<[ProjectedPoint; 10]>> {
    let mut points = SmallVec::new();
    let count = axes.len();

    for (index, axis) in axes.iter().enumerate() {
        let angle = axis_angle(index, count);
        let value = dataset.values.get(&axis.label).copied().unwrap_or(0.0);
        let max_value = geometry.effective_max(axis);
        let distance = RadialScale::new(max_value, geometry.radius)?.value_to_distance(value)?;

        points.push(ProjectedPoint {
            x: geometry.center_x + distance * angle.cos(),
            y: geometry.center_y + distance * angle.sin(),
            axis_label: axis.label.clone(),
            value,
            max_value,
            angle,
        });
    }

    Ok(points)
}

/// Center-to-rim line for one axis, with its label anchor just past the rim.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpoke {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub angle: f64,
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
    pub highlighted: bool,
}

/// Projects all axis spokes. Empty axes yield an empty set; the caller
/// suppresses rendering in that case.
#[must_use]
pub fn project_axis_spokes(axes: &[AxisSpec], geometry: GeometryConfig) -> Vec<AxisSpoke> {
    let count = axes.len();
    axes.iter()
        .enumerate()
        .map(|(index, axis)| {
            let angle = axis_angle(index, count);
            let (sin, cos) = (angle.sin(), angle.cos());
            let x2 = geometry.center_x + geometry.radius * cos;
            let y2 = geometry.center_y + geometry.radius * sin;
            AxisSpoke {
                x1: geometry.center_x,
                y1: geometry.center_y,
                x2,
                y2,
                angle,
                label: axis.label.clone(),
                label_x: x2 + cos * AXIS_LABEL_OFFSET,
                label_y: y2 + sin * AXIS_LABEL_OFFSET,
                highlighted: axis.highlighted,
            }
        })
        .collect()
}

/// Evenly spaced concentric ring radii, innermost first.
#[must_use]
pub fn grid_ring_radii(geometry: GeometryConfig, levels: usize) -> Vec<f64> {
    (1..=levels)
        .map(|level| geometry.radius * level as f64 / levels as f64)
        .collect()
}

/// One tick of the zoomed-in ruler drawn along a highlighted axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRulerTick {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

/// Projects the highlighted-axis ruler: evenly spaced ticks from 0 to the
/// axis ceiling, each carrying its denormalized value.
pub fn project_axis_ruler(
    axes: &[AxisSpec],
    axis_index: usize,
    geometry: GeometryConfig,
    tick_count: usize,
) -> ChartResult<Vec<AxisRulerTick>> {
    let axis = axes.get(axis_index).ok_or_else(|| {
        ChartError::InvalidData(format!("axis index {axis_index} out of range"))
    })?;

    let angle = axis_angle(axis_index, axes.len());
    let scale = RadialScale::new(geometry.effective_max(axis), geometry.radius)?;

    scale
        .tick_values(tick_count)
        .into_iter()
        .map(|value| {
            let distance = scale.value_to_distance(value)?;
            Ok(AxisRulerTick {
                x: geometry.center_x + distance * angle.cos(),
                y: geometry.center_y + distance * angle.sin(),
                value,
            })
        })
        .collect()
}
