mod data_controller;
mod engine_snapshot;
mod frame_builder;
mod interaction_controller;
mod options;
mod playback_controller;
mod validation;

pub use engine_snapshot::EngineSnapshot;
pub use options::RadarOptions;

use crate::core::color::Fill;
use crate::core::types::{AxisSpec, DatasetSpec};
use crate::error::ChartResult;
use crate::interaction::InteractionState;
use crate::layout::{self, ChartLayout};
use crate::playback::PlaybackState;
use crate::render::{Color, Renderer};
use crate::theme::{ThemeName, ThemeOverrides, ThemePalette, resolve_theme};

/// Host-facing callback fired whenever axis-highlight state changes, so the
/// host can persist or sync it.
pub type ChartChangeCallback = Box<dyn FnMut(&[AxisSpec])>;

/// Construction-time configuration for a chart instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RadarEngineConfig {
    pub width: Option<u32>,
    pub theme: ThemeName,
    pub theme_overrides: ThemeOverrides,
    pub options: RadarOptions,
}

impl RadarEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ThemeName) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_theme_overrides(mut self, overrides: ThemeOverrides) -> Self {
        self.theme_overrides = overrides;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: RadarOptions) -> Self {
        self.options = options;
        self
    }
}

/// One radar chart instance: owns the axis/dataset specs, interaction and
/// playback state, and a renderer backend. One state update triggers one
/// full frame rebuild; no partial states are observable.
pub struct RadarEngine<R: Renderer> {
    renderer: R,
    width: u32,
    layout: ChartLayout,
    theme: ThemePalette,
    options: RadarOptions,
    palette: Vec<Color>,
    axes: Vec<AxisSpec>,
    datasets: Vec<DatasetSpec>,
    fills: Vec<Fill>,
    interaction: InteractionState,
    playback: PlaybackState,
    /// Logical clock in milliseconds, fed by `advance`.
    clock_ms: f64,
    initial_footnote_pending: Option<usize>,
    chart_change_callback: Option<ChartChangeCallback>,
}

impl<R: Renderer> RadarEngine<R> {
    pub fn new(renderer: R, config: RadarEngineConfig) -> ChartResult<Self> {
        let palette = validation::validate_options(&config.options)?;
        let width = config.width.unwrap_or(layout::DEFAULT_WIDTH);
        let chart_layout = layout::resolve_layout(width, config.options.show_legend, 0)?;
        let initial_footnote_pending = config.options.active_footnote;

        Ok(Self {
            renderer,
            width,
            layout: chart_layout,
            theme: resolve_theme(config.theme, config.theme_overrides),
            options: config.options,
            palette,
            axes: Vec::new(),
            datasets: Vec::new(),
            fills: Vec::new(),
            interaction: InteractionState::default(),
            playback: PlaybackState::default(),
            clock_ms: 0.0,
            initial_footnote_pending,
            chart_change_callback: None,
        })
    }

    #[must_use]
    pub fn axes(&self) -> &[AxisSpec] {
        &self.axes
    }

    #[must_use]
    pub fn datasets(&self) -> &[DatasetSpec] {
        &self.datasets
    }

    #[must_use]
    pub fn options(&self) -> &RadarOptions {
        &self.options
    }

    #[must_use]
    pub fn theme(&self) -> ThemePalette {
        self.theme
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    #[must_use]
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    /// Applies a new available width, typically from a host resize
    /// observer.
    pub fn set_width(&mut self, width: u32) -> ChartResult<()> {
        self.width = width;
        self.relayout()
    }

    pub fn set_theme(&mut self, theme: ThemeName, overrides: ThemeOverrides) {
        self.theme = resolve_theme(theme, overrides);
    }

    /// Registers the axis-highlight change callback.
    pub fn set_chart_change_callback(&mut self, callback: ChartChangeCallback) {
        self.chart_change_callback = Some(callback);
    }

    /// Feeds elapsed wall-clock time into the engine's logical clock,
    /// stepping playback, long-press detection, and the cosmetic animation
    /// flags. Returns whether anything observable changed.
    pub fn advance(&mut self, elapsed_ms: f64) -> ChartResult<bool> {
        let stepped =
            self.playback
                .advance(elapsed_ms, self.options.playback, &mut self.datasets)?;
        self.clock_ms += elapsed_ms;
        let long_pressed = self.interaction.poll_long_press(self.clock_ms);
        Ok(stepped || long_pressed)
    }

    /// Builds the current frame and hands it to the renderer backend.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    fn relayout(&mut self) -> ChartResult<()> {
        let legend_rows = self
            .datasets
            .iter()
            .filter(|dataset| dataset.status.is_visible())
            .count()
            + usize::from(!self.options.legend_title.is_empty());
        self.layout = layout::resolve_layout(self.width, self.options.show_legend, legend_rows)?;
        Ok(())
    }

    fn fire_chart_change(&mut self) {
        if let Some(callback) = self.chart_change_callback.as_mut() {
            callback(&self.axes);
        }
    }
}
