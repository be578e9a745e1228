use tracing::trace;

use crate::error::ChartResult;
use crate::interaction::HoverTarget;
use crate::render::Renderer;

use super::RadarEngine;

impl<R: Renderer> RadarEngine<R> {
    /// Click on a dataset's legend entry: one step through the status cycle
    /// plus promotion to the top of the stack.
    pub fn legend_click(&mut self, dataset_index: usize) -> ChartResult<()> {
        self.interaction.dataset_click(
            &mut self.datasets,
            dataset_index,
            self.clock_ms,
            self.options.animation_duration_ms,
        )
    }

    /// Click on a dataset's polygon; same transition as the legend entry.
    pub fn polygon_click(&mut self, dataset_index: usize) -> ChartResult<()> {
        self.legend_click(dataset_index)
    }

    /// Click on an axis label: toggles that axis's pinned highlight and
    /// notifies the host through the chart-change callback.
    pub fn axis_click(&mut self, axis_index: usize) -> ChartResult<()> {
        let changed = self.interaction.axis_click(
            &mut self.axes,
            axis_index,
            self.clock_ms,
            self.options.animation_duration_ms,
        )?;
        if changed {
            self.fire_chart_change();
        }
        Ok(())
    }

    pub fn hover_dataset(&mut self, dataset_index: usize) {
        self.interaction.hover_enter(HoverTarget::Dataset(dataset_index));
    }

    pub fn hover_axis(&mut self, axis_index: usize) {
        self.interaction.hover_enter(HoverTarget::Axis(axis_index));
    }

    pub fn hover_leave(&mut self) {
        self.interaction.hover_leave();
    }

    /// Press-and-hold entry point. Holding past the long-press threshold
    /// (see `advance`) pins a persistent highlight on the target.
    pub fn press_began_dataset(&mut self, dataset_index: usize) {
        self.interaction
            .press_began(HoverTarget::Dataset(dataset_index), self.clock_ms);
    }

    pub fn press_began_axis(&mut self, axis_index: usize) {
        self.interaction
            .press_began(HoverTarget::Axis(axis_index), self.clock_ms);
    }

    /// Release of a press. A release before the long-press threshold is a
    /// plain tap and feeds the click path for its target.
    pub fn press_released(&mut self) -> ChartResult<()> {
        match self.interaction.press_released(self.clock_ms) {
            Some(HoverTarget::Dataset(index)) => self.legend_click(index),
            Some(HoverTarget::Axis(index)) => self.axis_click(index),
            None => Ok(()),
        }
    }

    /// Tap on empty chart space: clears persistent long-press highlight.
    pub fn background_tap(&mut self) {
        trace!("background tap");
        self.interaction.background_tap();
    }

    /// Activates, switches, or toggles off a footnote, deriving the full
    /// highlight overlay from its targets.
    pub fn footnote_click(&mut self, footnote_index: usize) -> ChartResult<()> {
        let axes_changed = self.interaction.footnote_toggle(
            &self.options.footnotes,
            footnote_index,
            &mut self.datasets,
            &mut self.axes,
        )?;
        if axes_changed {
            self.fire_chart_change();
        }
        Ok(())
    }

    #[must_use]
    pub fn active_footnote(&self) -> Option<usize> {
        self.interaction.active_footnote()
    }

    #[must_use]
    pub fn dataset_order(&self) -> &[usize] {
        self.interaction.order()
    }

    #[must_use]
    pub fn hovered(&self) -> Option<HoverTarget> {
        self.interaction.hovered()
    }

    #[must_use]
    pub fn pinned_highlight(&self) -> Option<HoverTarget> {
        self.interaction.pinned_highlight()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.interaction.is_animating(self.clock_ms)
    }

    #[must_use]
    pub fn is_axis_animating(&self) -> bool {
        self.interaction.is_axis_animating(self.clock_ms)
    }
}
