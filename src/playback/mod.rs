//! Time-series playback over the dataset list.
//!
//! The controller never owns a timer. A host adapter accumulates real
//! elapsed time into [`PlaybackState::advance`]; every transition is a
//! deterministic function of elapsed milliseconds, so ticks are exactly
//! reproducible in tests. The adapter must cancel its timer on stop, reset,
//! and teardown.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::{DatasetSpec, DatasetStatus};
use crate::error::{ChartError, ChartResult};

/// Tuning for playback stepping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Milliseconds per playback step.
    pub play_speed_ms: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            play_speed_ms: 1000.0,
        }
    }
}

impl PlaybackConfig {
    pub fn validate(self) -> ChartResult<()> {
        if !self.play_speed_ms.is_finite() || self.play_speed_ms <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "play speed must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlaybackPhase {
    #[default]
    Idle,
    Playing,
    /// User-driven timeline position; cancels playback.
    Scrubbing,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PlaybackState {
    pub phase: PlaybackPhase,
    pub step: usize,
    elapsed_in_step_ms: f64,
    /// Dataset whose value bubbles are forced visible by playback.
    bubble_index: Option<usize>,
}

impl PlaybackState {
    #[must_use]
    pub fn bubble_index(self) -> Option<usize> {
        self.bubble_index
    }

    /// Begins playback from the start. No-op while already playing or with
    /// an empty dataset list; returns whether playback started.
    pub fn start(&mut self, datasets: &mut [DatasetSpec]) -> bool {
        if self.phase == PlaybackPhase::Playing || datasets.is_empty() {
            return false;
        }

        for dataset in datasets.iter_mut() {
            dataset.status = DatasetStatus::Hidden;
        }
        *self = Self {
            phase: PlaybackPhase::Playing,
            ..Self::default()
        };
        debug!(count = datasets.len(), "playback started");
        true
    }

    /// Feeds elapsed wall-clock milliseconds into the stepper. Returns
    /// whether any step fired.
    pub fn advance(
        &mut self,
        elapsed_ms: f64,
        config: PlaybackConfig,
        datasets: &mut [DatasetSpec],
    ) -> ChartResult<bool> {
        if !elapsed_ms.is_finite() || elapsed_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "elapsed time must be finite and >= 0".to_owned(),
            ));
        }
        config.validate()?;

        if self.phase != PlaybackPhase::Playing {
            return Ok(false);
        }

        self.elapsed_in_step_ms += elapsed_ms;
        let mut stepped = false;
        while self.phase == PlaybackPhase::Playing
            && self.elapsed_in_step_ms >= config.play_speed_ms
        {
            self.elapsed_in_step_ms -= config.play_speed_ms;
            apply_step(datasets, self.step);
            self.bubble_index = Some(self.step);
            self.step += 1;
            stepped = true;
            if self.step >= datasets.len() {
                self.phase = PlaybackPhase::Finished;
                debug!(steps = self.step, "playback finished");
            }
        }
        Ok(stepped)
    }

    /// Freezes playback at the current step without touching visibility.
    pub fn stop(&mut self) {
        if self.phase == PlaybackPhase::Playing {
            self.phase = PlaybackPhase::Idle;
            self.elapsed_in_step_ms = 0.0;
        }
    }

    /// Jumps to the timeline position `percent` (0-100), canceling playback.
    pub fn scrub(&mut self, percent: f64, datasets: &mut [DatasetSpec]) -> ChartResult<()> {
        if !percent.is_finite() {
            return Err(ChartError::InvalidData(
                "scrub percent must be finite".to_owned(),
            ));
        }
        if datasets.is_empty() {
            return Ok(());
        }

        let clamped = percent.clamp(0.0, 100.0);
        let step = (clamped / 100.0 * (datasets.len() - 1) as f64).floor() as usize;
        self.phase = PlaybackPhase::Scrubbing;
        self.step = step;
        self.elapsed_in_step_ms = 0.0;
        apply_step(datasets, step);
        self.bubble_index = Some(step);
        Ok(())
    }

    /// Rewinds to the initial playback frame: first dataset visible with its
    /// value bubbles, everything after it hidden.
    pub fn reset(&mut self, datasets: &mut [DatasetSpec]) {
        *self = Self::default();
        if datasets.is_empty() {
            return;
        }
        apply_step(datasets, 0);
        self.bubble_index = Some(0);
    }
}

/// Per-step visibility rule shared by ticks, scrubbing, and reset: datasets
/// before the step fade to inactive, the step dataset is active, later
/// datasets stay hidden.
fn apply_step(datasets: &mut [DatasetSpec], step: usize) {
    for (index, dataset) in datasets.iter_mut().enumerate() {
        dataset.status = match index.cmp(&step) {
            std::cmp::Ordering::Less => DatasetStatus::Inactive,
            std::cmp::Ordering::Equal => DatasetStatus::Active,
            std::cmp::Ordering::Greater => DatasetStatus::Hidden,
        };
    }
}
