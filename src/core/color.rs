use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Paint};

/// Fallback used when a caller-supplied color string cannot be parsed.
pub const FALLBACK_GRAY: Color = Color::rgb(0.42, 0.447, 0.502);

/// Default dataset palette, cycled when datasets carry no explicit fill.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#3b82f6", // blue
    "#ef4444", // red
    "#10b981", // green
    "#f59e0b", // amber
    "#8b5cf6", // purple
    "#06b6d4", // cyan
    "#84cc16", // lime
    "#f97316", // orange
    "#ec4899", // pink
    "#6b7280", // gray
];

/// Solid-or-gradient paint description for one dataset polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Fill {
    Solid(Color),
    Gradient {
        from: Color,
        to: Color,
        angle_deg: f64,
    },
}

impl Fill {
    /// Representative color used for legend swatches and the grayscale
    /// transform (gradients are represented by their start color).
    #[must_use]
    pub fn key_color(self) -> Color {
        match self {
            Self::Solid(color) => color,
            Self::Gradient { from, .. } => from,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        match self {
            Self::Solid(color) => color.validate(),
            Self::Gradient {
                from,
                to,
                angle_deg,
            } => {
                from.validate()?;
                to.validate()?;
                if !angle_deg.is_finite() {
                    return Err(ChartError::InvalidConfig(
                        "gradient angle must be finite".to_owned(),
                    ));
                }
                Ok(())
            }
        }
    }
}

/// Parses `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(...)` and `rgba(...)` strings.
pub fn parse_color(input: &str) -> ChartResult<Color> {
    let trimmed = input.trim();

    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex, input);
    }

    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("rgb(") || lower.starts_with("rgba(") {
        return parse_rgb_call(&lower, input);
    }

    Err(ChartError::InvalidColor(input.to_owned()))
}

/// Lenient variant for data-path color strings: falls back to gray with a
/// diagnostic instead of failing the render pass.
#[must_use]
pub fn parse_color_lenient(input: &str) -> Color {
    match parse_color(input) {
        Ok(color) => color,
        Err(_) => {
            warn!(input, "unrecognized color format, using fallback gray");
            FALLBACK_GRAY
        }
    }
}

fn parse_hex(hex: &str, original: &str) -> ChartResult<Color> {
    if !hex.is_ascii() {
        return Err(ChartError::InvalidColor(original.to_owned()));
    }

    let channel = |byte: u8| f64::from(byte) / 255.0;

    match hex.len() {
        3 => {
            let mut channels = [0.0_f64; 3];
            for (slot, c) in channels.iter_mut().zip(hex.chars()) {
                let nibble = c
                    .to_digit(16)
                    .ok_or_else(|| ChartError::InvalidColor(original.to_owned()))?
                    as u8;
                *slot = channel(nibble * 16 + nibble);
            }
            Ok(Color::rgb(channels[0], channels[1], channels[2]))
        }
        6 | 8 => {
            let mut bytes = [0_u8; 4];
            bytes[3] = 255;
            for (i, slot) in bytes.iter_mut().take(hex.len() / 2).enumerate() {
                *slot = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                    .map_err(|_| ChartError::InvalidColor(original.to_owned()))?;
            }
            Ok(Color::rgba(
                channel(bytes[0]),
                channel(bytes[1]),
                channel(bytes[2]),
                channel(bytes[3]),
            ))
        }
        _ => Err(ChartError::InvalidColor(original.to_owned())),
    }
}

fn parse_rgb_call(lower: &str, original: &str) -> ChartResult<Color> {
    let open = lower
        .find('(')
        .ok_or_else(|| ChartError::InvalidColor(original.to_owned()))?;
    let close = lower
        .rfind(')')
        .ok_or_else(|| ChartError::InvalidColor(original.to_owned()))?;
    if close <= open {
        return Err(ChartError::InvalidColor(original.to_owned()));
    }

    let parts: Vec<&str> = lower[open + 1..close].split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(ChartError::InvalidColor(original.to_owned()));
    }

    let mut channels = [0.0_f64; 4];
    channels[3] = 1.0;
    for (i, part) in parts.iter().enumerate() {
        let value: f64 = part
            .parse()
            .map_err(|_| ChartError::InvalidColor(original.to_owned()))?;
        channels[i] = if i < 3 { value / 255.0 } else { value };
    }

    let color = Color::rgba(channels[0], channels[1], channels[2], channels[3]);
    color
        .validate()
        .map_err(|_| ChartError::InvalidColor(original.to_owned()))?;
    Ok(color)
}

/// Rec. 601 luma conversion used for inactive datasets.
///
/// The output alpha comes from the theme so gray polygons stay legible
/// against both light and dark backgrounds.
#[must_use]
pub fn to_grayscale(color: Color, opacity: f64) -> Color {
    let luma = 0.299 * color.red + 0.587 * color.green + 0.114 * color.blue;
    Color::rgba(luma, luma, luma, opacity)
}

/// Resolves a fill to a concrete paint for one polygon.
///
/// Gradient endpoints are derived from the polygon bounding box and the
/// configured angle; 0 degrees points up, angles advance clockwise.
#[must_use]
pub fn resolve_fill(fill: Fill, bbox: (f64, f64, f64, f64)) -> Paint {
    match fill {
        Fill::Solid(color) => Paint::Solid(color),
        Fill::Gradient {
            from,
            to,
            angle_deg,
        } => {
            let (min_x, min_y, max_x, max_y) = bbox;
            let cx = (min_x + max_x) / 2.0;
            let cy = (min_y + max_y) / 2.0;
            let half_diag = ((max_x - min_x).hypot(max_y - min_y)) / 2.0;
            let radians = angle_deg.to_radians();
            let (dx, dy) = (radians.sin(), -radians.cos());
            Paint::LinearGradient {
                x1: cx - dx * half_diag,
                y1: cy - dy * half_diag,
                x2: cx + dx * half_diag,
                y2: cy + dy * half_diag,
                from,
                to,
            }
        }
    }
}

/// Replaces the alpha channel, used for status- and stack-derived opacity.
#[must_use]
pub fn with_alpha(color: Color, alpha: f64) -> Color {
    Color::rgba(color.red, color.green, color.blue, alpha)
}
