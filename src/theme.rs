//! Theme presets and per-field override merging.
//!
//! A theme fixes the chart chrome colors plus the alpha used when inactive
//! datasets are converted to grayscale. Any field can be overridden
//! individually; the merge is a plain function over the enumerated set.

use serde::{Deserialize, Serialize};

use crate::render::Color;

const fn rgb8(red: u8, green: u8, blue: u8) -> Color {
    Color::rgb(red as f64 / 255.0, green as f64 / 255.0, blue as f64 / 255.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
    Unicorn,
    Retro,
}

/// Fully resolved chart chrome palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: Color,
    pub grid: Color,
    pub text: Color,
    pub legend_background: Color,
    pub legend_border: Color,
    pub legend_text: Color,
    /// Alpha applied to grayscale-converted inactive datasets.
    pub inactive_opacity: f64,
}

impl ThemePalette {
    #[must_use]
    pub fn preset(name: ThemeName) -> Self {
        match name {
            ThemeName::Light => Self {
                background: rgb8(0xff, 0xff, 0xff),
                grid: rgb8(0xe5, 0xe7, 0xeb),
                text: rgb8(0x37, 0x41, 0x51),
                legend_background: rgb8(0xf9, 0xfa, 0xfb),
                legend_border: rgb8(0xe5, 0xe7, 0xeb),
                legend_text: rgb8(0x37, 0x41, 0x51),
                inactive_opacity: 0.6,
            },
            ThemeName::Dark => Self {
                background: rgb8(0x1f, 0x29, 0x37),
                grid: rgb8(0x37, 0x41, 0x51),
                text: rgb8(0xf9, 0xfa, 0xfb),
                legend_background: rgb8(0x11, 0x18, 0x27),
                legend_border: rgb8(0x37, 0x41, 0x51),
                legend_text: rgb8(0xf9, 0xfa, 0xfb),
                inactive_opacity: 0.9,
            },
            ThemeName::Unicorn => Self {
                background: rgb8(0xfd, 0xf4, 0xff),
                grid: rgb8(0xf5, 0xd0, 0xfe),
                text: rgb8(0x86, 0x19, 0x8f),
                legend_background: rgb8(0xfa, 0xe8, 0xff),
                legend_border: rgb8(0xf0, 0xab, 0xfc),
                legend_text: rgb8(0x86, 0x19, 0x8f),
                inactive_opacity: 0.6,
            },
            ThemeName::Retro => Self {
                background: rgb8(0xfe, 0xf3, 0xc7),
                grid: rgb8(0xd9, 0x77, 0x06),
                text: rgb8(0x78, 0x35, 0x0f),
                legend_background: rgb8(0xfd, 0xe6, 0x8a),
                legend_border: rgb8(0xb4, 0x53, 0x09),
                legend_text: rgb8(0x78, 0x35, 0x0f),
                inactive_opacity: 0.6,
            },
        }
    }
}

/// Per-field palette overrides merged on top of a preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ThemeOverrides {
    pub background: Option<Color>,
    pub grid: Option<Color>,
    pub text: Option<Color>,
    pub legend_background: Option<Color>,
    pub legend_border: Option<Color>,
    pub legend_text: Option<Color>,
    pub inactive_opacity: Option<f64>,
}

impl ThemeOverrides {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::default()
    }
}

/// Merges a preset with overrides; overridden fields win, preset fills the rest.
#[must_use]
pub fn resolve_theme(name: ThemeName, overrides: ThemeOverrides) -> ThemePalette {
    let preset = ThemePalette::preset(name);
    ThemePalette {
        background: overrides.background.unwrap_or(preset.background),
        grid: overrides.grid.unwrap_or(preset.grid),
        text: overrides.text.unwrap_or(preset.text),
        legend_background: overrides
            .legend_background
            .unwrap_or(preset.legend_background),
        legend_border: overrides.legend_border.unwrap_or(preset.legend_border),
        legend_text: overrides.legend_text.unwrap_or(preset.legend_text),
        inactive_opacity: overrides.inactive_opacity.unwrap_or(preset.inactive_opacity),
    }
}
