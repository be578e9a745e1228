use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Fraction of the edge length that bounds the raw corner bulge.
const EDGE_BULGE_FRACTION: f64 = 0.3;
/// Floor for the center-proximity scale applied to small/concave shapes.
const ADAPTIVE_SCALE_FLOOR: f64 = 0.3;

const ZERO_EDGE_EPSILON: f64 = 1e-9;

/// One command of a drawable outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    QuadTo { cx: f64, cy: f64, x: f64, y: f64 },
    Close,
}

/// Closed outline description produced by the path builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutlinePath {
    commands: Vec<PathCommand>,
}

impl OutlinePath {
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// A non-empty outline always ends in `Close`.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }
}

/// Plain vertex consumed by the path builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlineVertex {
    pub x: f64,
    pub y: f64,
}

impl OutlineVertex {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Builds a closed outline through `points` in order.
///
/// `corner_radius` 0 yields a sharp polygon. A non-zero radius replaces each
/// edge with a quadratic curve through the edge midpoint displaced along the
/// outward perpendicular; positive radii bulge away from `center`, negative
/// radii pull toward it.
///
/// The displacement is clamped to `min(|corner_radius|, edge_len * 0.3)`.
/// Polygons with >= 4 vertices and a positive radius additionally bound the
/// bulge to half the minimum clearance between the edge midpoint and the
/// neighboring edge chords, which keeps tight concave corners from
/// self-intersecting. Smaller or concave shapes scale the bulge by the
/// vertices' proximity to the chart center instead, with a floor of 0.3.
#[must_use]
pub fn build_outline(
    points: &[OutlineVertex],
    corner_radius: f64,
    center: OutlineVertex,
) -> OutlinePath {
    let mut commands = Vec::new();
    let Some(first) = points.first() else {
        return OutlinePath { commands };
    };

    commands.push(PathCommand::MoveTo {
        x: first.x,
        y: first.y,
    });

    if points.len() == 1 {
        commands.push(PathCommand::Close);
        return OutlinePath { commands };
    }

    if corner_radius == 0.0 {
        for point in &points[1..] {
            commands.push(PathCommand::LineTo {
                x: point.x,
                y: point.y,
            });
        }
        commands.push(PathCommand::Close);
        return OutlinePath { commands };
    }

    let n = points.len();
    let reach = points
        .iter()
        .map(|p| OrderedFloat(p.distance_to(center)))
        .max()
        .map_or(1.0, f64::from)
        .max(ZERO_EDGE_EPSILON);

    for i in 0..n {
        let current = points[i];
        let next = points[(i + 1) % n];

        let edge_len = current.distance_to(next);
        if edge_len < ZERO_EDGE_EPSILON {
            commands.push(PathCommand::LineTo {
                x: next.x,
                y: next.y,
            });
            continue;
        }

        let mid = OutlineVertex::new((current.x + next.x) / 2.0, (current.y + next.y) / 2.0);

        // Unit perpendicular pointing away from the chart center.
        let mut perp_x = -(next.y - current.y) / edge_len;
        let mut perp_y = (next.x - current.x) / edge_len;
        if perp_x * (mid.x - center.x) + perp_y * (mid.y - center.y) < 0.0 {
            perp_x = -perp_x;
            perp_y = -perp_y;
        }
        if corner_radius < 0.0 {
            perp_x = -perp_x;
            perp_y = -perp_y;
        }

        let base = corner_radius.abs().min(edge_len * EDGE_BULGE_FRACTION);
        let displacement = if n >= 4 && corner_radius > 0.0 {
            base.min(neighbor_clearance(points, i, mid) / 2.0)
        } else {
            let proximity = current.distance_to(center).min(next.distance_to(center)) / reach;
            base * proximity.clamp(ADAPTIVE_SCALE_FLOOR, 1.0)
        };

        commands.push(PathCommand::QuadTo {
            cx: mid.x + perp_x * displacement,
            cy: mid.y + perp_y * displacement,
            x: next.x,
            y: next.y,
        });
    }

    commands.push(PathCommand::Close);
    OutlinePath { commands }
}

/// Minimum distance from `mid` to the chords of the two neighboring edges.
fn neighbor_clearance(points: &[OutlineVertex], edge_index: usize, mid: OutlineVertex) -> f64 {
    let n = points.len();
    let prev_chord = (points[(edge_index + n - 1) % n], points[edge_index]);
    let next_chord = (points[(edge_index + 1) % n], points[(edge_index + 2) % n]);

    segment_distance(mid, prev_chord.0, prev_chord.1)
        .min(segment_distance(mid, next_chord.0, next_chord.1))
}

fn segment_distance(point: OutlineVertex, a: OutlineVertex, b: OutlineVertex) -> f64 {
    let ab_x = b.x - a.x;
    let ab_y = b.y - a.y;
    let len_sq = ab_x * ab_x + ab_y * ab_y;
    if len_sq < ZERO_EDGE_EPSILON {
        return point.distance_to(a);
    }

    let t = (((point.x - a.x) * ab_x + (point.y - a.y) * ab_y) / len_sq).clamp(0.0, 1.0);
    point.distance_to(OutlineVertex::new(a.x + t * ab_x, a.y + t * ab_y))
}
