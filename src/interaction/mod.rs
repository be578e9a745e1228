//! Interaction state for one chart instance.
//!
//! All transitions are synchronous `(state, event) -> state'` steps. Nothing
//! here schedules timers: long-press detection and the cosmetic animation
//! flags run off caller-supplied instants, so the whole machine stays
//! deterministic and directly testable.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::{AxisSpec, DatasetSpec, DatasetStatus, Footnote};
use crate::error::{ChartError, ChartResult};

/// Press-and-hold duration that promotes a press into a persistent highlight.
pub const LONG_PRESS_THRESHOLD_MS: f64 = 500.0;

/// Interactive element under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverTarget {
    Dataset(usize),
    Axis(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct PendingPress {
    target: HoverTarget,
    began_at_ms: f64,
}

/// State captured when a footnote activates, restored when the same footnote
/// is toggled off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct FootnoteRestore {
    statuses: Vec<DatasetStatus>,
    axis_flags: Vec<bool>,
    order: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InteractionState {
    /// Stacking order, index 0 = topmost. Render order is the reverse.
    order: Vec<usize>,
    hovered: Option<HoverTarget>,
    pending_press: Option<PendingPress>,
    /// Long-press highlight that persists past release.
    pinned_highlight: Option<HoverTarget>,
    /// Axis highlighted by hover only; reverts on leave unless the axis is
    /// pinned via click.
    transient_axis: Option<usize>,
    active_footnote: Option<usize>,
    footnote_restore: Option<FootnoteRestore>,
    animating_until_ms: Option<f64>,
    axis_animating_until_ms: Option<f64>,
}

impl InteractionState {
    /// Resets the machine for a fresh dataset list, keeping nothing.
    pub fn reset_for(&mut self, dataset_count: usize) {
        *self = Self {
            order: (0..dataset_count).collect(),
            ..Self::default()
        };
    }

    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Indices in the order polygons should be drawn: back to front, so the
    /// head of `order` lands on top.
    #[must_use]
    pub fn draw_order(&self) -> Vec<usize> {
        self.order.iter().rev().copied().collect()
    }

    #[must_use]
    pub fn topmost(&self) -> Option<usize> {
        self.order.first().copied()
    }

    #[must_use]
    pub fn hovered(&self) -> Option<HoverTarget> {
        self.hovered
    }

    #[must_use]
    pub fn pinned_highlight(&self) -> Option<HoverTarget> {
        self.pinned_highlight
    }

    #[must_use]
    pub fn transient_axis(&self) -> Option<usize> {
        self.transient_axis
    }

    #[must_use]
    pub fn active_footnote(&self) -> Option<usize> {
        self.active_footnote
    }

    /// Moves `index` to the front of the stack, preserving the relative
    /// order of everything else.
    pub fn promote(&mut self, index: usize) {
        self.order.retain(|&i| i != index);
        self.order.insert(0, index);
    }

    fn promote_all(&mut self, indices: &[usize]) {
        // Walk backwards so the group keeps its relative order at the front.
        for &index in indices.iter().rev() {
            self.promote(index);
        }
    }

    /// Legend-entry or polygon click: one step through the status cycle plus
    /// promotion to the top of the stack.
    pub fn dataset_click(
        &mut self,
        datasets: &mut [DatasetSpec],
        index: usize,
        now_ms: f64,
        animation_duration_ms: f64,
    ) -> ChartResult<()> {
        let dataset = datasets
            .get_mut(index)
            .ok_or_else(|| ChartError::InvalidData(format!("dataset index {index} out of range")))?;

        self.clear_footnote_keeping_current_state();
        self.cancel_pinned_highlight_except(HoverTarget::Dataset(index));

        let from = dataset.status;
        dataset.status = from.next_in_cycle();
        self.promote(index);
        self.animating_until_ms = Some(now_ms + animation_duration_ms);
        debug!(index, ?from, to = ?dataset.status, "dataset click");
        Ok(())
    }

    /// Axis-label click: toggles the pinned highlight for that axis.
    ///
    /// Returns `true` when the highlight set changed so the host callback
    /// can fire.
    pub fn axis_click(
        &mut self,
        axes: &mut [AxisSpec],
        index: usize,
        now_ms: f64,
        animation_duration_ms: f64,
    ) -> ChartResult<bool> {
        let axis = axes
            .get_mut(index)
            .ok_or_else(|| ChartError::InvalidData(format!("axis index {index} out of range")))?;

        self.clear_footnote_keeping_current_state();
        self.cancel_pinned_highlight_except(HoverTarget::Axis(index));

        axis.highlighted = !axis.highlighted;
        self.axis_animating_until_ms = Some(now_ms + animation_duration_ms);
        debug!(index, highlighted = axis.highlighted, "axis click");
        Ok(true)
    }

    /// Desktop hover: emphasis marker only, never a status change.
    pub fn hover_enter(&mut self, target: HoverTarget) {
        self.hovered = Some(target);
        if let HoverTarget::Axis(index) = target {
            self.transient_axis = Some(index);
        }
    }

    pub fn hover_leave(&mut self) {
        self.hovered = None;
        self.transient_axis = None;
    }

    /// Begins press-and-hold tracking on `target`.
    pub fn press_began(&mut self, target: HoverTarget, now_ms: f64) {
        self.pending_press = Some(PendingPress {
            target,
            began_at_ms: now_ms,
        });
    }

    /// Ends press tracking. Returns the target when released before the
    /// long-press threshold, so the caller can treat it as a plain tap.
    pub fn press_released(&mut self, now_ms: f64) -> Option<HoverTarget> {
        let pending = self.pending_press.take()?;
        if now_ms - pending.began_at_ms < LONG_PRESS_THRESHOLD_MS {
            Some(pending.target)
        } else {
            None
        }
    }

    /// Promotes a held press into a persistent highlight once the threshold
    /// passes. Called from the engine's deterministic clock step.
    pub fn poll_long_press(&mut self, now_ms: f64) -> bool {
        let Some(pending) = self.pending_press else {
            return false;
        };
        if now_ms - pending.began_at_ms < LONG_PRESS_THRESHOLD_MS {
            return false;
        }
        self.pending_press = None;
        self.pinned_highlight = Some(pending.target);
        debug!(pressed = ?pending.target, "long press highlight");
        true
    }

    /// Tap on empty chart space: drops the persistent highlight and hover.
    pub fn background_tap(&mut self) {
        self.pinned_highlight = None;
        self.hovered = None;
        self.pending_press = None;
    }

    fn cancel_pinned_highlight_except(&mut self, target: HoverTarget) {
        if self.pinned_highlight.is_some_and(|pinned| pinned != target) {
            self.pinned_highlight = None;
        }
    }

    /// Activates, switches, or toggles off a footnote.
    ///
    /// Activation snapshots the current statuses/axis flags/order and derives
    /// the full overlay from the footnote's targets. Toggling the same
    /// footnote off restores the snapshot. Switching footnotes (or clicking a
    /// legend/axis item while one is active) drops the snapshot and keeps the
    /// current state as the new baseline.
    ///
    /// Returns `true` when any axis highlight changed.
    pub fn footnote_toggle(
        &mut self,
        footnotes: &[Footnote],
        index: usize,
        datasets: &mut [DatasetSpec],
        axes: &mut [AxisSpec],
    ) -> ChartResult<bool> {
        let footnote = footnotes
            .get(index)
            .ok_or_else(|| ChartError::InvalidData(format!("footnote index {index} out of range")))?;

        let axis_flags_before: Vec<bool> = axes.iter().map(|axis| axis.highlighted).collect();

        if self.active_footnote == Some(index) {
            if let Some(restore) = self.footnote_restore.take() {
                for (dataset, status) in datasets.iter_mut().zip(restore.statuses) {
                    dataset.status = status;
                }
                for (axis, flag) in axes.iter_mut().zip(restore.axis_flags) {
                    axis.highlighted = flag;
                }
                self.order = restore.order;
            }
            self.active_footnote = None;
            debug!(index, "footnote deactivated");
        } else {
            self.clear_footnote_keeping_current_state();
            self.footnote_restore = Some(FootnoteRestore {
                statuses: datasets.iter().map(|dataset| dataset.status).collect(),
                axis_flags: axis_flags_before.clone(),
                order: self.order.clone(),
            });

            let mut promoted = Vec::new();
            for (i, dataset) in datasets.iter_mut().enumerate() {
                if !dataset.status.is_visible() {
                    continue;
                }
                if footnote.highlight_targets.contains(&dataset.label) {
                    dataset.status = DatasetStatus::Highlighted;
                    promoted.push(i);
                } else {
                    dataset.status = DatasetStatus::Inactive;
                }
            }
            // Keep the promoted group in its current stacking order.
            promoted.sort_by_key(|i| self.order.iter().position(|o| o == i));
            self.promote_all(&promoted);

            for axis in axes.iter_mut() {
                axis.highlighted = footnote.highlight_targets.contains(&axis.label);
            }

            self.active_footnote = Some(index);
            debug!(index, targets = footnote.highlight_targets.len(), "footnote activated");
        }

        let changed = axes
            .iter()
            .map(|axis| axis.highlighted)
            .ne(axis_flags_before.into_iter());
        Ok(changed)
    }

    fn clear_footnote_keeping_current_state(&mut self) {
        self.active_footnote = None;
        self.footnote_restore = None;
    }

    /// Marks the data-change crossfade window.
    pub fn mark_data_changed(&mut self, now_ms: f64, animation_duration_ms: f64) {
        self.animating_until_ms = Some(now_ms + animation_duration_ms);
    }

    #[must_use]
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.animating_until_ms.is_some_and(|until| now_ms < until)
    }

    #[must_use]
    pub fn is_axis_animating(&self, now_ms: f64) -> bool {
        self.axis_animating_until_ms
            .is_some_and(|until| now_ms < until)
    }
}
