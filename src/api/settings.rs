use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::YAxisScale;
use crate::error::{ChartError, ChartResult};

/// Visibility and label rotation of the dimension axis.
///
/// Serialized as `false`, `true`, `"compact"`, `"rotate-45"` or `"rotate-90"`;
/// `null` reads as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AxisEnabledMode {
    Off,
    #[default]
    On,
    Compact,
    Rotate45,
    Rotate90,
}

impl AxisEnabledMode {
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self != Self::Off
    }

    /// Tick-label rotation in degrees, when rotated.
    #[must_use]
    pub fn rotate_angle(self) -> Option<f64> {
        match self {
            Self::Rotate45 => Some(45.0),
            Self::Rotate90 => Some(90.0),
            Self::Off | Self::On | Self::Compact => None,
        }
    }

    fn as_token(self) -> Option<&'static str> {
        match self {
            Self::Compact => Some("compact"),
            Self::Rotate45 => Some("rotate-45"),
            Self::Rotate90 => Some("rotate-90"),
            Self::Off | Self::On => None,
        }
    }
}

impl FromStr for AxisEnabledMode {
    type Err = ChartError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "false" => Ok(Self::Off),
            "true" => Ok(Self::On),
            "compact" => Ok(Self::Compact),
            "rotate-45" => Ok(Self::Rotate45),
            "rotate-90" => Ok(Self::Rotate90),
            other => Err(ChartError::InvalidData(format!(
                "unknown axis enabled mode `{other}`"
            ))),
        }
    }
}

impl fmt::Display for AxisEnabledMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_token() {
            Some(token) => f.write_str(token),
            None => write!(f, "{}", self.is_enabled()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAxisEnabled {
    Flag(bool),
    Token(String),
}

impl Serialize for AxisEnabledMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_token() {
            Some(token) => serializer.serialize_str(token),
            None => serializer.serialize_bool(self.is_enabled()),
        }
    }
}

impl<'de> Deserialize<'de> for AxisEnabledMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<RawAxisEnabled>::deserialize(deserializer)? {
            Some(RawAxisEnabled::Flag(true)) => Ok(Self::On),
            Some(RawAxisEnabled::Flag(false)) | None => Ok(Self::Off),
            Some(RawAxisEnabled::Token(token)) => token.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Dimension scale selected in chart settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum XAxisScale {
    #[default]
    Ordinal,
    Histogram,
    Timeseries,
    Linear,
    Pow,
    Log,
}

/// Axis-related visualization settings.
///
/// Field names serialize to the visualization setting keys so hosts can hand
/// over their stored settings object directly. Unknown keys are ignored and
/// missing keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    #[serde(rename = "graph.x_axis.axis_enabled")]
    pub x_axis_enabled: AxisEnabledMode,
    #[serde(rename = "graph.x_axis.labels_enabled")]
    pub x_axis_labels_enabled: bool,
    #[serde(rename = "graph.x_axis.title_text")]
    pub x_axis_title_text: Option<String>,
    #[serde(rename = "graph.x_axis.scale")]
    pub x_axis_scale: XAxisScale,
    #[serde(rename = "graph.y_axis.auto_range")]
    pub y_axis_auto_range: bool,
    #[serde(rename = "graph.y_axis.min")]
    pub y_axis_min: Option<f64>,
    #[serde(rename = "graph.y_axis.max")]
    pub y_axis_max: Option<f64>,
    #[serde(rename = "graph.y_axis.axis_enabled")]
    pub y_axis_enabled: bool,
    #[serde(rename = "graph.y_axis.unpin_from_zero")]
    pub y_axis_unpin_from_zero: bool,
    #[serde(rename = "graph.y_axis.scale")]
    pub y_axis_scale: YAxisScale,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            x_axis_enabled: AxisEnabledMode::On,
            x_axis_labels_enabled: true,
            x_axis_title_text: None,
            x_axis_scale: XAxisScale::Ordinal,
            y_axis_auto_range: true,
            y_axis_min: None,
            y_axis_max: None,
            y_axis_enabled: true,
            y_axis_unpin_from_zero: false,
            y_axis_scale: YAxisScale::Linear,
        }
    }
}

impl ChartSettings {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let settings: Self = serde_json::from_str(input)?;
        settings.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(self) -> ChartResult<Self> {
        for (key, bound) in [
            ("graph.y_axis.min", self.y_axis_min),
            ("graph.y_axis.max", self.y_axis_max),
        ] {
            if bound.is_some_and(|value| !value.is_finite()) {
                return Err(ChartError::InvalidData(format!("{key} must be finite")));
            }
        }
        Ok(self)
    }

    #[must_use]
    pub fn with_x_axis_enabled(mut self, mode: AxisEnabledMode) -> Self {
        self.x_axis_enabled = mode;
        self
    }

    #[must_use]
    pub fn with_x_axis_title(mut self, title: impl Into<String>) -> Self {
        self.x_axis_title_text = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_x_axis_labels_enabled(mut self, enabled: bool) -> Self {
        self.x_axis_labels_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_x_axis_scale(mut self, scale: XAxisScale) -> Self {
        self.x_axis_scale = scale;
        self
    }

    #[must_use]
    pub fn with_y_axis_auto_range(mut self, auto_range: bool) -> Self {
        self.y_axis_auto_range = auto_range;
        self
    }

    /// Sets custom y bounds in semantic units; disables auto-range.
    #[must_use]
    pub fn with_y_axis_custom_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.y_axis_auto_range = false;
        self.y_axis_min = min;
        self.y_axis_max = max;
        self
    }

    #[must_use]
    pub fn with_y_axis_enabled(mut self, enabled: bool) -> Self {
        self.y_axis_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_y_axis_unpin_from_zero(mut self, unpin: bool) -> Self {
        self.y_axis_unpin_from_zero = unpin;
        self
    }

    #[must_use]
    pub fn with_y_axis_scale(mut self, scale: YAxisScale) -> Self {
        self.y_axis_scale = scale;
        self
    }

    #[must_use]
    pub fn is_histogram(&self) -> bool {
        self.x_axis_scale == XAxisScale::Histogram
    }
}
