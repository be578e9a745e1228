use tracing::debug;

use crate::error::ChartResult;
use crate::playback::PlaybackPhase;
use crate::render::Renderer;

use super::RadarEngine;

impl<R: Renderer> RadarEngine<R> {
    /// Starts playback from the beginning. No-op while already playing or
    /// with no datasets. The host adapter should begin feeding `advance`.
    pub fn play(&mut self) -> bool {
        self.playback.start(&mut self.datasets)
    }

    /// Freezes playback at the current step without resetting visibility.
    /// The host adapter must cancel its timer.
    pub fn pause(&mut self) {
        self.playback.stop();
    }

    /// Jumps the timeline to `percent` (0-100), canceling playback.
    pub fn scrub(&mut self, percent: f64) -> ChartResult<()> {
        self.playback.scrub(percent, &mut self.datasets)
    }

    /// Rewinds to the initial playback frame. The host adapter must cancel
    /// its timer.
    pub fn reset_playback(&mut self) {
        debug!("playback reset");
        self.playback.reset(&mut self.datasets);
    }

    #[must_use]
    pub fn playback_phase(&self) -> PlaybackPhase {
        self.playback.phase
    }

    #[must_use]
    pub fn playback_step(&self) -> usize {
        self.playback.step
    }
}
