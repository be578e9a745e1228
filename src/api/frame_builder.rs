use tracing::warn;

use crate::core::color::{Fill, resolve_fill, to_grayscale, with_alpha};
use crate::core::geometry::{
    self, AXIS_RULER_TICKS, GRID_RING_LEVELS, GeometryConfig,
};
use crate::core::path::{OutlineVertex, build_outline};
use crate::core::types::{DatasetStatus, ProjectedPoint};
use crate::error::ChartResult;
use crate::interaction::HoverTarget;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, Paint, PathPrimitive, RectPrimitive, RenderFrame,
    Renderer, TextHAlign, TextPrimitive,
};

use super::RadarEngine;

const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

const BACKGROUND_CORNER_RADIUS: f64 = 8.0;
const GRID_ALPHA: f64 = 0.3;
const SPOKE_ALPHA: f64 = 0.5;
const CHROME_STROKE_WIDTH: f64 = 1.0;

const BASE_STROKE_WIDTH: f64 = 2.0;
const EMPHASIS_STROKE_WIDTH: f64 = 3.0;
const BASE_STROKE_ALPHA: f64 = 0.8;
const TOP_STROKE_ALPHA: f64 = 0.9;
const ACTIVE_FILL_ALPHA: f64 = 0.2;
const HIGHLIGHT_FILL_ALPHA: f64 = 0.45;
const TOP_FILL_BONUS: f64 = 0.15;
/// Whole-chart fade applied during the data-change crossfade window.
const ANIMATING_FADE: f64 = 0.8;

const VERTEX_DOT_RADIUS: f64 = 4.0;
const VERTEX_DOT_STROKE: f64 = 2.0;
const VALUE_BUBBLE_OFFSET: f64 = 15.0;

const AXIS_LABEL_FONT: f64 = 12.0;
const AXIS_LABEL_FONT_HIGHLIGHTED: f64 = 13.0;
const RULER_TICK_HALF_LEN: f64 = 3.0;
const RULER_LABEL_OFFSET: f64 = 8.0;
const RULER_FONT: f64 = 9.0;
const VALUE_FONT: f64 = 10.0;

const LEGEND_PADDING: f64 = 16.0;
const LEGEND_ROW_HEIGHT: f64 = 24.0;
const LEGEND_SWATCH_SIZE: f64 = 12.0;
const LEGEND_TITLE_FONT: f64 = 14.0;
const LEGEND_ROW_FONT: f64 = 12.0;
const LEGEND_INACTIVE_ROW_ALPHA: f64 = 0.5;

const FOOTNOTE_FONT: f64 = 11.0;
const FOOTNOTE_DIM_ALPHA: f64 = 0.6;

const TIMELINE_BOTTOM_OFFSET: f64 = 12.0;
const TIMELINE_TRACK_ALPHA: f64 = 0.8;
const TIMELINE_MARKER_RADIUS: f64 = 5.0;
const PLAY_GLYPH_WIDTH: f64 = 9.0;
const PLAY_GLYPH_HALF_HEIGHT: f64 = 5.0;

impl<R: Renderer> RadarEngine<R> {
    /// Materializes one deterministic frame from the current specs and
    /// interaction/playback state.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let layout = self.layout;
        let mut frame = RenderFrame::new(layout.viewport);

        let mut background = RectPrimitive::filled(
            0.0,
            0.0,
            f64::from(layout.viewport.width),
            f64::from(layout.viewport.height),
            self.theme.background,
        )
        .with_corner_radius(BACKGROUND_CORNER_RADIUS);
        if self.options.show_border {
            background = background.with_border(self.theme.legend_border, CHROME_STROKE_WIDTH);
        }
        frame.rects.push(background);

        if self.axes.is_empty() || self.datasets.is_empty() {
            warn!("nothing to draw: axes or datasets are empty");
            return Ok(frame);
        }

        let geometry =
            GeometryConfig::new(layout.center_x, layout.center_y, layout.radius, &self.axes)?;

        if self.options.show_grid {
            for radius in geometry::grid_ring_radii(geometry, GRID_RING_LEVELS) {
                frame.circles.push(CirclePrimitive::outline(
                    geometry.center_x,
                    geometry.center_y,
                    radius,
                    CHROME_STROKE_WIDTH,
                    with_alpha(self.theme.grid, GRID_ALPHA),
                ));
            }
        }

        self.push_axes(&mut frame, geometry)?;
        self.push_datasets(&mut frame, geometry)?;
        self.push_legend(&mut frame);
        self.push_timeline(&mut frame);
        self.push_footnotes(&mut frame);

        Ok(frame)
    }

    fn push_axes(&self, frame: &mut RenderFrame, geometry: GeometryConfig) -> ChartResult<()> {
        let spokes = geometry::project_axis_spokes(&self.axes, geometry);

        for (index, spoke) in spokes.iter().enumerate() {
            frame.lines.push(LinePrimitive::new(
                spoke.x1,
                spoke.y1,
                spoke.x2,
                spoke.y2,
                CHROME_STROKE_WIDTH,
                with_alpha(self.theme.grid, SPOKE_ALPHA),
            ));

            if self.options.show_labels {
                let font = if spoke.highlighted {
                    AXIS_LABEL_FONT_HIGHLIGHTED
                } else {
                    AXIS_LABEL_FONT
                };
                frame.texts.push(TextPrimitive::new(
                    spoke.label.clone(),
                    spoke.label_x,
                    spoke.label_y,
                    font,
                    self.theme.text,
                    TextHAlign::Center,
                ));
            }

            if self.axis_ruler_visible(index) {
                self.push_axis_ruler(frame, geometry, index, spoke.angle)?;
            }
        }
        Ok(())
    }

    fn axis_ruler_visible(&self, index: usize) -> bool {
        self.axes[index].highlighted
            || self.interaction.transient_axis() == Some(index)
            || self.interaction.pinned_highlight() == Some(HoverTarget::Axis(index))
    }

    /// Zoomed-in tick ruler along one highlighted axis: evenly spaced ticks
    /// from 0 to the axis ceiling, each labeled with its denormalized value.
    fn push_axis_ruler(
        &self,
        frame: &mut RenderFrame,
        geometry: GeometryConfig,
        axis_index: usize,
        angle: f64,
    ) -> ChartResult<()> {
        let (perp_x, perp_y) = (-angle.sin(), angle.cos());
        for tick in geometry::project_axis_ruler(&self.axes, axis_index, geometry, AXIS_RULER_TICKS)? {
            frame.lines.push(LinePrimitive::new(
                tick.x - perp_x * RULER_TICK_HALF_LEN,
                tick.y - perp_y * RULER_TICK_HALF_LEN,
                tick.x + perp_x * RULER_TICK_HALF_LEN,
                tick.y + perp_y * RULER_TICK_HALF_LEN,
                CHROME_STROKE_WIDTH,
                self.theme.text,
            ));
            frame.texts.push(TextPrimitive::new(
                format_value(tick.value),
                tick.x + perp_x * RULER_LABEL_OFFSET,
                tick.y + perp_y * RULER_LABEL_OFFSET,
                RULER_FONT,
                self.theme.text,
                TextHAlign::Center,
            ));
        }
        Ok(())
    }

    /// Dataset polygons, drawn back to front so the head of the stacking
    /// order lands on top.
    fn push_datasets(&self, frame: &mut RenderFrame, geometry: GeometryConfig) -> ChartResult<()> {
        let fade = if self.interaction.is_animating(self.clock_ms) {
            ANIMATING_FADE
        } else {
            1.0
        };

        for index in self.interaction.draw_order() {
            let dataset = &self.datasets[index];
            if !dataset.status.is_visible() {
                continue;
            }

            let points = geometry::project_dataset_points(&self.axes, dataset, geometry)?;
            if points.is_empty() {
                continue;
            }

            let vertices: Vec<OutlineVertex> = points
                .iter()
                .map(|point| OutlineVertex::new(point.x, point.y))
                .collect();
            let outline = build_outline(
                &vertices,
                self.options.data_border_radius,
                OutlineVertex::new(geometry.center_x, geometry.center_y),
            );

            let fill = self.fills[index];
            let key_color = fill.key_color();
            let is_top = self.interaction.topmost() == Some(index);
            let emphasized = self.interaction.hovered() == Some(HoverTarget::Dataset(index))
                || self.interaction.pinned_highlight() == Some(HoverTarget::Dataset(index));
            let stroke_width = if emphasized {
                EMPHASIS_STROKE_WIDTH
            } else {
                BASE_STROKE_WIDTH
            };

            let primitive = match dataset.status {
                DatasetStatus::Hidden => continue,
                DatasetStatus::Inactive => {
                    let gray = to_grayscale(key_color, self.theme.inactive_opacity * fade);
                    PathPrimitive::new(outline).with_stroke(gray, stroke_width)
                }
                DatasetStatus::Active | DatasetStatus::Highlighted => {
                    let base_fill_alpha = if dataset.status == DatasetStatus::Highlighted {
                        HIGHLIGHT_FILL_ALPHA
                    } else {
                        ACTIVE_FILL_ALPHA
                    };
                    let fill_alpha =
                        (base_fill_alpha + if is_top { TOP_FILL_BONUS } else { 0.0 }) * fade;
                    let stroke_alpha = (if is_top {
                        TOP_STROKE_ALPHA
                    } else {
                        BASE_STROKE_ALPHA
                    }) * fade;

                    let bbox = bounding_box(&points);
                    PathPrimitive::new(outline)
                        .with_fill(resolve_fill(fill_with_alpha(fill, fill_alpha), bbox))
                        .with_stroke(with_alpha(key_color, stroke_alpha), stroke_width)
                }
            };
            frame.paths.push(primitive);

            if dataset.status != DatasetStatus::Inactive {
                self.push_vertex_marks(frame, &points, index, key_color, fade);
            }
        }
        Ok(())
    }

    fn push_vertex_marks(
        &self,
        frame: &mut RenderFrame,
        points: &[ProjectedPoint],
        dataset_index: usize,
        key_color: Color,
        fade: f64,
    ) {
        let bubbles_visible =
            self.options.show_values || self.playback.bubble_index() == Some(dataset_index);

        for point in points {
            let mut dot = CirclePrimitive::filled(
                point.x,
                point.y,
                VERTEX_DOT_RADIUS,
                Paint::Solid(with_alpha(key_color, fade)),
            );
            dot.stroke_color = Some(with_alpha(WHITE, fade));
            dot.stroke_width = VERTEX_DOT_STROKE;
            frame.markers.push(dot);

            if bubbles_visible {
                frame.texts.push(TextPrimitive::new(
                    format_value(point.value),
                    point.x,
                    point.y - VALUE_BUBBLE_OFFSET,
                    VALUE_FONT,
                    self.theme.text,
                    TextHAlign::Center,
                ));
            }
        }
    }

    fn push_legend(&self, frame: &mut RenderFrame) {
        if !self.options.show_legend {
            return;
        }
        let Some(area) = self.layout.legend else {
            return;
        };

        frame.rects.push(
            RectPrimitive::filled(area.x, area.y, area.width, area.height, self.theme.legend_background)
                .with_border(self.theme.legend_border, CHROME_STROKE_WIDTH),
        );

        let mut row_y = area.y + LEGEND_PADDING;
        if !self.options.legend_title.is_empty() {
            frame.texts.push(TextPrimitive::new(
                self.options.legend_title.clone(),
                area.x + LEGEND_PADDING,
                row_y,
                LEGEND_TITLE_FONT,
                self.theme.legend_text,
                TextHAlign::Left,
            ));
            row_y += LEGEND_ROW_HEIGHT;
        }

        // Legend rows keep data order; stacking order only affects polygons.
        for (index, dataset) in self.datasets.iter().enumerate() {
            if !dataset.status.is_visible() {
                continue;
            }

            let key_color = self.fills[index].key_color();
            let (swatch_color, row_alpha) = if dataset.status == DatasetStatus::Inactive {
                (
                    to_grayscale(key_color, self.theme.inactive_opacity),
                    LEGEND_INACTIVE_ROW_ALPHA,
                )
            } else {
                (key_color, 1.0)
            };

            frame.rects.push(RectPrimitive::filled(
                area.x + LEGEND_PADDING,
                row_y,
                LEGEND_SWATCH_SIZE,
                LEGEND_SWATCH_SIZE,
                swatch_color,
            ));
            frame.texts.push(TextPrimitive::new(
                dataset.label.clone(),
                area.x + LEGEND_PADDING + LEGEND_SWATCH_SIZE + 6.0,
                row_y,
                LEGEND_ROW_FONT,
                with_alpha(self.theme.legend_text, row_alpha),
                TextHAlign::Left,
            ));
            row_y += LEGEND_ROW_HEIGHT;
        }
    }

    /// Playback controls along the bottom edge: a play glyph and a scrub
    /// track with a marker at the current step. Hit-testing belongs to the
    /// host; the engine only draws the state it owns.
    fn push_timeline(&self, frame: &mut RenderFrame) {
        if !self.options.show_timeline && !self.options.show_play_button {
            return;
        }

        let layout = self.layout;
        let y = layout.chart_y + layout.chart_side - TIMELINE_BOTTOM_OFFSET;
        let mut track_start = layout.chart_x + LEGEND_PADDING;

        if self.options.show_play_button {
            let glyph = build_outline(
                &[
                    OutlineVertex::new(track_start, y - PLAY_GLYPH_HALF_HEIGHT),
                    OutlineVertex::new(track_start + PLAY_GLYPH_WIDTH, y),
                    OutlineVertex::new(track_start, y + PLAY_GLYPH_HALF_HEIGHT),
                ],
                0.0,
                OutlineVertex::new(track_start, y),
            );
            frame
                .paths
                .push(PathPrimitive::new(glyph).with_fill(Paint::Solid(self.theme.text)));
            track_start += PLAY_GLYPH_WIDTH + 8.0;
        }

        if self.options.show_timeline {
            let track_end = layout.chart_x + layout.chart_side - LEGEND_PADDING;
            frame.lines.push(LinePrimitive::new(
                track_start,
                y,
                track_end,
                y,
                BASE_STROKE_WIDTH,
                with_alpha(self.theme.grid, TIMELINE_TRACK_ALPHA),
            ));

            let count = self.datasets.len();
            let progress = if count > 1 {
                self.playback.step.min(count - 1) as f64 / (count - 1) as f64
            } else {
                0.0
            };
            frame.markers.push(CirclePrimitive::filled(
                track_start + (track_end - track_start) * progress,
                y,
                TIMELINE_MARKER_RADIUS,
                Paint::Solid(self.theme.text),
            ));
        }
    }

    /// Footnote strip along the bottom of the chart square: one label per
    /// footnote plus the active note (or the placeholder).
    fn push_footnotes(&self, frame: &mut RenderFrame) {
        if self.options.footnotes.is_empty() {
            return;
        }

        let layout = self.layout;
        let slot_width =
            (layout.chart_side - LEGEND_PADDING * 2.0) / self.options.footnotes.len() as f64;
        let labels_y = layout.chart_y + layout.chart_side - 40.0;
        let active = self.interaction.active_footnote();

        for (index, footnote) in self.options.footnotes.iter().enumerate() {
            let color = if active == Some(index) {
                self.theme.text
            } else {
                with_alpha(self.theme.text, FOOTNOTE_DIM_ALPHA)
            };
            frame.texts.push(TextPrimitive::new(
                footnote.label.clone(),
                layout.chart_x + LEGEND_PADDING + slot_width * (index as f64 + 0.5),
                labels_y,
                FOOTNOTE_FONT,
                color,
                TextHAlign::Center,
            ));
        }

        let note = match active {
            Some(index) => self.options.footnotes[index].note.clone(),
            None => self.options.placeholder.clone(),
        };
        if !note.is_empty() {
            frame.texts.push(TextPrimitive::new(
                note,
                layout.chart_x + LEGEND_PADDING,
                labels_y + 20.0,
                FOOTNOTE_FONT,
                with_alpha(self.theme.text, FOOTNOTE_DIM_ALPHA),
                TextHAlign::Left,
            ));
        }
    }
}

fn bounding_box(points: &[ProjectedPoint]) -> (f64, f64, f64, f64) {
    let mut bbox = (f64::MAX, f64::MAX, f64::MIN, f64::MIN);
    for point in points {
        bbox.0 = bbox.0.min(point.x);
        bbox.1 = bbox.1.min(point.y);
        bbox.2 = bbox.2.max(point.x);
        bbox.3 = bbox.3.max(point.y);
    }
    bbox
}

/// Sets the target alpha on a fill, covering both gradient stops.
fn fill_with_alpha(fill: Fill, alpha: f64) -> Fill {
    match fill {
        Fill::Solid(color) => Fill::Solid(with_alpha(color, alpha)),
        Fill::Gradient {
            from,
            to,
            angle_deg,
        } => Fill::Gradient {
            from: with_alpha(from, alpha),
            to: with_alpha(to, alpha),
            angle_deg,
        },
    }
}

/// Integer values print without a fraction; everything else keeps one
/// decimal.
fn format_value(value: f64) -> String {
    if (value - value.round()).abs() < 1e-6 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}
