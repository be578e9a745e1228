use crate::error::{ChartError, ChartResult};

/// Maps raw axis values to radial pixel distances from the chart center.
///
/// The mapping is deliberately unclamped: a value above `max_value` projects
/// beyond `radius`, rendering "off the chart".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialScale {
    max_value: f64,
    radius: f64,
}

impl RadialScale {
    pub fn new(max_value: f64, radius: f64) -> ChartResult<Self> {
        if !max_value.is_finite() || max_value <= 0.0 {
            return Err(ChartError::InvalidData(
                "radial scale max value must be finite and > 0".to_owned(),
            ));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "radial scale radius must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self { max_value, radius })
    }

    #[must_use]
    pub fn max_value(self) -> f64 {
        self.max_value
    }

    #[must_use]
    pub fn radius(self) -> f64 {
        self.radius
    }

    pub fn value_to_distance(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        Ok(self.radius * value / self.max_value)
    }

    pub fn distance_to_value(self, distance: f64) -> ChartResult<f64> {
        if !distance.is_finite() {
            return Err(ChartError::InvalidData(
                "distance must be finite".to_owned(),
            ));
        }
        Ok(distance / self.radius * self.max_value)
    }

    /// Evenly spaced tick values from 0 to `max_value`, inclusive.
    #[must_use]
    pub fn tick_values(self, tick_count: usize) -> Vec<f64> {
        if tick_count < 2 {
            return vec![self.max_value];
        }
        (0..tick_count)
            .map(|i| self.max_value * i as f64 / (tick_count - 1) as f64)
            .collect()
    }
}
