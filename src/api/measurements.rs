use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::AxisEnabledMode;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Padding {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// Measured pixel extents of the widest/tallest tick labels per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct TicksDimensions {
    pub y_ticks_width_left: f64,
    pub y_ticks_width_right: f64,
    pub x_ticks_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ChartBounds {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl ChartBounds {
    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }
}

/// Output of the layout-measurement pass, read-only for the axis builders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartMeasurements {
    pub padding: Padding,
    pub ticks_dimensions: TicksDimensions,
    pub bounds: ChartBounds,
    /// Horizontal pixel span of the plot area.
    pub boundary_width: f64,
    /// X-axis mode picked by the measurement pass to fit category labels.
    pub axis_enabled_setting: AxisEnabledMode,
}

impl ChartMeasurements {
    /// Creates measurements deriving `boundary_width` from `bounds`.
    #[must_use]
    pub fn new(
        padding: Padding,
        ticks_dimensions: TicksDimensions,
        bounds: ChartBounds,
        axis_enabled_setting: AxisEnabledMode,
    ) -> Self {
        Self {
            padding,
            ticks_dimensions,
            bounds,
            boundary_width: bounds.width(),
            axis_enabled_setting,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        let ticks = self.ticks_dimensions;
        for (field, value) in [
            ("y_ticks_width_left", ticks.y_ticks_width_left),
            ("y_ticks_width_right", ticks.y_ticks_width_right),
            ("x_ticks_height", ticks.x_ticks_height),
            ("boundary_width", self.boundary_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidMeasurements(format!(
                    "{field} must be finite and >= 0"
                )));
            }
        }
        if self.bounds.height() < 0.0 {
            return Err(ChartError::InvalidMeasurements(
                "chart bounds bottom must be >= top".to_owned(),
            ));
        }
        Ok(self)
    }
}
