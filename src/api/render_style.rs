use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Named colors the axis builders look up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub text_dark: Color,
    pub border: Color,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            text_dark: Color::from_rgb8(0x4c, 0x57, 0x73),
            border: Color::from_rgb8(0xee, 0xec, 0xec),
        }
    }
}

/// Theme line style for metric-axis split lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitLineStyle {
    pub color: Color,
    pub width: f64,
}

impl Default for SplitLineStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgb8(0xee, 0xec, 0xec),
            width: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianTheme {
    pub label_font_size: f64,
    pub split_line: SplitLineStyle,
}

impl Default for CartesianTheme {
    fn default() -> Self {
        Self {
            label_font_size: 12.0,
            split_line: SplitLineStyle::default(),
        }
    }
}

/// Fixed layout constants shared by every cartesian chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Gap between tick labels and the axis name.
    pub axis_name_margin: f64,
    pub axis_ticks_margin_x: f64,
    pub axis_ticks_margin_y: f64,
    /// Height reserved for timeline event markers under the x axis.
    pub timeline_events_height: f64,
    pub axis_name_weight: u16,
    pub axis_ticks_weight: u16,
    /// Dash length of metric split lines.
    pub split_line_dash: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            axis_name_margin: 20.0,
            axis_ticks_margin_x: 4.0,
            axis_ticks_margin_y: 8.0,
            timeline_events_height: 14.0,
            axis_name_weight: 700,
            axis_ticks_weight: 700,
            split_line_dash: 5.0,
        }
    }
}

/// Rendering environment the axis options are styled for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingContext {
    pub font_family: String,
    pub theme: CartesianTheme,
    pub palette: ColorPalette,
    pub style: ChartStyle,
}

impl Default for RenderingContext {
    fn default() -> Self {
        Self {
            font_family: "Lato".to_owned(),
            theme: CartesianTheme::default(),
            palette: ColorPalette::default(),
            style: ChartStyle::default(),
        }
    }
}

impl RenderingContext {
    #[must_use]
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    #[must_use]
    pub fn with_label_font_size(mut self, font_size: f64) -> Self {
        self.theme.label_font_size = font_size;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.theme.label_font_size.is_finite() || self.theme.label_font_size <= 0.0 {
            return Err(ChartError::InvalidData(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        self.palette.text_dark.validate()?;
        self.palette.border.validate()?;
        self.theme.split_line.color.validate()
    }
}
