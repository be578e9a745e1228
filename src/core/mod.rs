pub mod color;
pub mod geometry;
pub mod path;
pub mod scale;
pub mod types;

pub use color::{DEFAULT_PALETTE, FALLBACK_GRAY, Fill};
pub use geometry::{
    AXIS_RULER_TICKS, AxisRulerTick, AxisSpoke, DEFAULT_AXIS_MAX, GRID_RING_LEVELS, GeometryConfig,
};
pub use path::{OutlinePath, OutlineVertex, PathCommand};
pub use scale::RadialScale;
pub use types::{AxisSpec, DatasetSpec, DatasetStatus, Footnote, ProjectedPoint, Viewport};
