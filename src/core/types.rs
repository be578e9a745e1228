use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::color::Fill;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Visibility/emphasis state of one dataset.
///
/// `Hidden` is reachable only through playback or a dataset's initial
/// status, never through the click cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DatasetStatus {
    Hidden,
    Inactive,
    #[default]
    Active,
    Highlighted,
}

impl DatasetStatus {
    #[must_use]
    pub fn is_visible(self) -> bool {
        self != Self::Hidden
    }

    /// Advances one step in the click cycle `Inactive -> Active -> Highlighted -> Inactive`.
    ///
    /// `Hidden` stays `Hidden`: a hidden dataset has no legend row or polygon
    /// to click, so the cycle never reaches it.
    #[must_use]
    pub fn next_in_cycle(self) -> Self {
        match self {
            Self::Hidden => Self::Hidden,
            Self::Inactive => Self::Active,
            Self::Active => Self::Highlighted,
            Self::Highlighted => Self::Inactive,
        }
    }
}

/// One labeled spoke of the radar. Order within the axis list defines the
/// angular position; index 0 points due north.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub label: String,
    /// Value ceiling for this axis. Falls back to the chart-wide maximum.
    pub max_value: Option<f64>,
    /// Pinned highlight state, toggled by axis clicks and footnotes.
    pub highlighted: bool,
}

impl AxisSpec {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            max_value: None,
            highlighted: false,
        }
    }

    #[must_use]
    pub fn with_max_value(mut self, max_value: f64) -> Self {
        self.max_value = Some(max_value);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.label.is_empty() {
            return Err(ChartError::InvalidData(
                "axis label must not be empty".to_owned(),
            ));
        }
        if let Some(max_value) = self.max_value {
            if !max_value.is_finite() || max_value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "axis `{}` max_value must be finite and > 0",
                    self.label
                )));
            }
        }
        Ok(())
    }
}

/// One polygon/series plotted across all axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSpec {
    pub label: String,
    /// Axis label -> raw value. Axes missing from the map read as 0.
    pub values: IndexMap<String, f64>,
    /// Explicit fill; `None` cycles the configured palette.
    pub fill: Option<Fill>,
    pub status: DatasetStatus,
}

impl DatasetSpec {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values: IndexMap::new(),
            fill: None,
            status: DatasetStatus::default(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, axis_label: impl Into<String>, value: f64) -> Self {
        self.values.insert(axis_label.into(), value);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: DatasetStatus) -> Self {
        self.status = status;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.label.is_empty() {
            return Err(ChartError::InvalidData(
                "dataset label must not be empty".to_owned(),
            ));
        }
        for (axis_label, value) in &self.values {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "dataset `{}` value for `{axis_label}` must be finite",
                    self.label
                )));
            }
        }
        Ok(())
    }
}

/// A named annotation driving a deterministic highlight overlay.
///
/// `highlight_targets` entries match dataset labels or axis labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footnote {
    pub label: String,
    pub note: String,
    pub highlight_targets: Vec<String>,
}

impl Footnote {
    #[must_use]
    pub fn new(label: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            note: note.into(),
            highlight_targets: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.highlight_targets.push(target.into());
        self
    }
}

/// One projected vertex of a dataset polygon, in pixel space.
///
/// Ephemeral: recomputed from the specs and the current geometry on every pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub axis_label: String,
    pub value: f64,
    pub max_value: f64,
    pub angle: f64,
}
