use serde::{Deserialize, Serialize};

use crate::core::color::DEFAULT_PALETTE;
use crate::core::types::Footnote;
use crate::playback::PlaybackConfig;

/// Host-facing display and behavior switches.
///
/// Everything here is supplied fresh by the host; nothing is persisted by
/// the engine itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarOptions {
    pub show_grid: bool,
    pub show_labels: bool,
    /// Value bubbles at every vertex (playback forces them per-step).
    pub show_values: bool,
    pub show_legend: bool,
    pub show_border: bool,
    /// Empty string hides the title row.
    pub legend_title: String,
    /// Dataset palette, cycled when a dataset has no explicit fill.
    /// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(...)`, `rgba(...)`.
    pub colors: Vec<String>,
    /// Signed corner radius for dataset polygons: positive bulges outward,
    /// negative pulls inward, 0 draws sharp corners.
    pub data_border_radius: f64,
    /// Crossfade window after data changes.
    pub animation_duration_ms: f64,
    pub show_play_button: bool,
    pub show_timeline: bool,
    pub playback: PlaybackConfig,
    pub footnotes: Vec<Footnote>,
    /// Shown in the footnote strip while no footnote is active.
    pub placeholder: String,
    /// Footnote activated on the first render.
    pub active_footnote: Option<usize>,
}

impl Default for RadarOptions {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_labels: true,
            show_values: false,
            show_legend: true,
            show_border: false,
            legend_title: String::new(),
            colors: DEFAULT_PALETTE.iter().map(|c| (*c).to_owned()).collect(),
            data_border_radius: 0.0,
            animation_duration_ms: 1000.0,
            show_play_button: false,
            show_timeline: false,
            playback: PlaybackConfig::default(),
            footnotes: Vec::new(),
            placeholder: String::new(),
            active_footnote: None,
        }
    }
}

impl RadarOptions {
    #[must_use]
    pub fn with_legend_title(mut self, title: impl Into<String>) -> Self {
        self.legend_title = title.into();
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<String>) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_data_border_radius(mut self, radius: f64) -> Self {
        self.data_border_radius = radius;
        self
    }

    #[must_use]
    pub fn with_play_speed_ms(mut self, play_speed_ms: f64) -> Self {
        self.playback.play_speed_ms = play_speed_ms;
        self
    }

    #[must_use]
    pub fn with_footnotes(mut self, footnotes: Vec<Footnote>) -> Self {
        self.footnotes = footnotes;
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}
