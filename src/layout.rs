//! Width-driven chart layout.
//!
//! The engine receives a plain width; observing the host container and
//! reacting to resize notifications is presentation-layer glue that lives
//! outside this crate. Given that width, this module decides legend
//! placement and the chart square the geometry runs in.

use serde::{Deserialize, Serialize};

use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};

/// Default chart width in pixels.
pub const DEFAULT_WIDTH: u32 = 400;
/// Fixed legend column width when the legend sits beside the chart.
pub const LEGEND_SIDE_WIDTH: f64 = 120.0;
/// Below this width the legend stacks under the chart.
pub const STACK_BREAKPOINT_PX: u32 = 480;
/// Chart radius as a fraction of the half-square.
pub const RADIUS_FACTOR: f64 = 0.7;

const LEGEND_ROW_HEIGHT: f64 = 24.0;
const LEGEND_PADDING: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendPlacement {
    /// Fixed-width column on the left of the chart square.
    Side,
    /// Full-width block under the chart square.
    Stacked,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub placement: LegendPlacement,
}

/// Resolved pixel layout for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub chart_x: f64,
    pub chart_y: f64,
    pub chart_side: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub legend: Option<LegendArea>,
}

/// Computes the layout for `width` pixels of available space.
///
/// The chart itself is always square. A visible legend takes a side column
/// at or above the breakpoint and stacks underneath below it; `legend_rows`
/// sizes the stacked block.
pub fn resolve_layout(width: u32, show_legend: bool, legend_rows: usize) -> ChartResult<ChartLayout> {
    if width == 0 {
        return Err(ChartError::InvalidViewport { width, height: 0 });
    }

    let full_width = f64::from(width);

    let (chart_x, chart_side, legend) = if !show_legend {
        (0.0, full_width, None)
    } else if width >= STACK_BREAKPOINT_PX {
        let side = full_width - LEGEND_SIDE_WIDTH;
        let legend = LegendArea {
            x: 0.0,
            y: 0.0,
            width: LEGEND_SIDE_WIDTH,
            height: side,
            placement: LegendPlacement::Side,
        };
        (LEGEND_SIDE_WIDTH, side, Some(legend))
    } else {
        let height = LEGEND_PADDING * 2.0 + legend_rows as f64 * LEGEND_ROW_HEIGHT;
        let legend = LegendArea {
            x: 0.0,
            y: full_width,
            width: full_width,
            height,
            placement: LegendPlacement::Stacked,
        };
        (0.0, full_width, Some(legend))
    };

    let total_height = match legend {
        Some(area) if area.placement == LegendPlacement::Stacked => chart_side + area.height,
        _ => chart_side,
    };

    let center_x = chart_x + chart_side / 2.0;
    let center_y = chart_side / 2.0;
    let radius = chart_side / 2.0 * RADIUS_FACTOR;

    Ok(ChartLayout {
        viewport: Viewport::new(width.max(1), total_height.ceil() as u32),
        chart_x,
        chart_y: 0.0,
        chart_side,
        center_x,
        center_y,
        radius,
        legend,
    })
}
