use std::collections::HashSet;

use tracing::{debug, warn};

use crate::core::color::Fill;
use crate::core::types::{AxisSpec, DatasetSpec};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::RadarEngine;

/// Axis counts beyond this render but get a legibility diagnostic.
pub const MAX_AXES: usize = 10;

impl<R: Renderer> RadarEngine<R> {
    /// Replaces the chart structure. Order defines angular position.
    pub fn set_axes(&mut self, axes: Vec<AxisSpec>) -> ChartResult<()> {
        let mut seen = HashSet::new();
        for axis in &axes {
            axis.validate()?;
            if !seen.insert(axis.label.as_str()) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate axis label `{}`",
                    axis.label
                )));
            }
        }

        if axes.is_empty() {
            warn!("axis list is empty, chart will not render");
        } else if axes.len() > MAX_AXES {
            warn!(count = axes.len(), max = MAX_AXES, "too many axes for a legible chart");
        }

        debug!(count = axes.len(), "set axes");
        self.axes = axes;
        self.warn_on_unknown_value_labels();
        self.maybe_apply_initial_footnote()?;
        Ok(())
    }

    /// Replaces the dataset list, resolving palette fills and resetting
    /// interaction and playback state.
    pub fn set_datasets(&mut self, datasets: Vec<DatasetSpec>) -> ChartResult<()> {
        let mut seen = HashSet::new();
        for dataset in &datasets {
            dataset.validate()?;
            if !seen.insert(dataset.label.as_str()) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate dataset label `{}`",
                    dataset.label
                )));
            }
            if let Some(fill) = dataset.fill {
                fill.validate()?;
            }
        }

        if datasets.is_empty() {
            warn!("dataset list is empty, chart will not render");
        }

        self.fills = datasets
            .iter()
            .enumerate()
            .map(|(index, dataset)| {
                dataset
                    .fill
                    .unwrap_or(Fill::Solid(self.palette[index % self.palette.len()]))
            })
            .collect();

        debug!(count = datasets.len(), "set datasets");
        self.interaction.reset_for(datasets.len());
        self.playback = Default::default();
        self.datasets = datasets;
        self.interaction
            .mark_data_changed(self.clock_ms, self.options.animation_duration_ms);
        self.warn_on_unknown_value_labels();
        self.relayout()?;
        self.maybe_apply_initial_footnote()?;
        Ok(())
    }

    fn warn_on_unknown_value_labels(&self) {
        if self.axes.is_empty() {
            return;
        }
        for dataset in &self.datasets {
            for axis_label in dataset.values.keys() {
                if !self.axes.iter().any(|axis| axis.label == *axis_label) {
                    warn!(
                        dataset = %dataset.label,
                        value_label = %axis_label,
                        "dataset value does not match any axis"
                    );
                }
            }
        }
    }

    /// Applies the configured initial footnote once both axes and datasets
    /// are present.
    fn maybe_apply_initial_footnote(&mut self) -> ChartResult<()> {
        let Some(index) = self.initial_footnote_pending else {
            return Ok(());
        };
        if self.axes.is_empty() || self.datasets.is_empty() {
            return Ok(());
        }
        self.initial_footnote_pending = None;
        self.footnote_click(index)
    }
}
