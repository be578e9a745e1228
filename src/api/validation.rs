use crate::core::color::parse_color;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::RadarOptions;

/// Validates host-supplied options and resolves the palette strings.
///
/// Color strings are parsed strictly here: a typo in configuration is a
/// programming error, unlike data-path colors which degrade to gray.
pub(super) fn validate_options(options: &RadarOptions) -> ChartResult<Vec<Color>> {
    options.playback.validate()?;

    if !options.animation_duration_ms.is_finite() || options.animation_duration_ms < 0.0 {
        return Err(ChartError::InvalidConfig(
            "animation duration must be finite and >= 0".to_owned(),
        ));
    }

    if !options.data_border_radius.is_finite() {
        return Err(ChartError::InvalidConfig(
            "data border radius must be finite".to_owned(),
        ));
    }

    if options.colors.is_empty() {
        return Err(ChartError::InvalidConfig(
            "color palette must not be empty".to_owned(),
        ));
    }
    let palette = options
        .colors
        .iter()
        .map(|input| parse_color(input))
        .collect::<ChartResult<Vec<Color>>>()?;

    if let Some(index) = options.active_footnote {
        if index >= options.footnotes.len() {
            return Err(ChartError::InvalidConfig(format!(
                "active footnote index {index} out of range ({} footnotes)",
                options.footnotes.len()
            )));
        }
    }

    Ok(palette)
}
