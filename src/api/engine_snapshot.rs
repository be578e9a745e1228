use serde::{Deserialize, Serialize};

use crate::core::types::{AxisSpec, DatasetStatus, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::playback::PlaybackPhase;
use crate::render::Renderer;

use super::RadarEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// hosts that persist interaction state across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub axes: Vec<AxisSpec>,
    pub statuses: Vec<DatasetStatus>,
    pub order: Vec<usize>,
    pub active_footnote: Option<usize>,
    pub playback_phase: PlaybackPhase,
    pub playback_step: usize,
}

impl<R: Renderer> RadarEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            viewport: self.layout.viewport,
            axes: self.axes.clone(),
            statuses: self.datasets.iter().map(|dataset| dataset.status).collect(),
            order: self.interaction.order().to_vec(),
            active_footnote: self.interaction.active_footnote(),
            playback_phase: self.playback.phase,
            playback_step: self.playback.step,
        }
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|err| ChartError::InvalidData(format!("snapshot serialization failed: {err}")))
    }
}
