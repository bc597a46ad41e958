use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};
use smallvec::SmallVec;

use crate::core::AxisPosition;
use crate::core::primitives::parse_number_value;

use super::Color;

pub type RawValueLabelFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;
pub type CategoryLabelFn = Arc<dyn Fn(&str) -> String + Send + Sync + 'static>;
pub type DeferredBoundFn = Arc<dyn Fn() -> f64 + Send + Sync + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Value,
    Time,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NameLocation {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

/// Which category ticks the renderer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TickInterval {
    /// Renderer decides which ticks to skip.
    #[default]
    Auto,
    /// Every category tick is drawn.
    All,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyleOption {
    pub color: Color,
    pub font_size: f64,
    pub font_weight: u16,
    pub font_family: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisNameOption {
    pub name: Option<String>,
    pub name_gap: f64,
    pub name_location: NameLocation,
    pub name_rotate: Option<f64>,
    pub name_text_style: TextStyleOption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleOption {
    pub show: bool,
}

impl ToggleOption {
    pub const HIDDEN: Self = Self { show: false };
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisLineOption {
    pub show: bool,
    pub color: Option<Color>,
}

/// Dashed grid-line style of a metric axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitLineOption {
    pub dash: f64,
    pub opacity: f64,
    pub color: Color,
    pub width: f64,
}

/// Shared tick-label styling before per-axis adjustments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicksDefaultOption {
    pub hide_overlap: bool,
    pub text_style: TextStyleOption,
}

/// Tick-label formatter callback handed to the renderer.
#[derive(Clone)]
pub enum AxisLabelFormatter {
    /// Receives the renderer-internal numeric coordinate.
    RawValue(RawValueLabelFn),
    /// Receives the category label.
    Category(CategoryLabelFn),
}

impl AxisLabelFormatter {
    /// Formats a numeric tick.
    ///
    /// A category formatter receives the number's text form, which is only
    /// meaningful for numeric category labels. It is not a category index
    /// lookup; category axes should be formatted through `format_category`.
    #[must_use]
    pub fn format_value(&self, raw_value: f64) -> String {
        match self {
            Self::RawValue(formatter) => formatter(raw_value),
            Self::Category(formatter) => formatter(&raw_value.to_string()),
        }
    }

    /// Formats a category tick; numeric formatters fall back to an empty
    /// label when `label` is not a number.
    #[must_use]
    pub fn format_category(&self, label: &str) -> String {
        match self {
            Self::Category(formatter) => formatter(label),
            Self::RawValue(formatter) => parse_number_value(label)
                .map(|value| formatter(value))
                .unwrap_or_default(),
        }
    }
}

impl fmt::Debug for AxisLabelFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RawValue(_) => f.write_str("AxisLabelFormatter::RawValue(..)"),
            Self::Category(_) => f.write_str("AxisLabelFormatter::Category(..)"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisLabelOption {
    pub show: bool,
    pub margin: f64,
    pub rotate: Option<f64>,
    pub hide_overlap: bool,
    pub text_style: TextStyleOption,
    pub interval: TickInterval,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_min_label: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_max_label: Option<bool>,
    /// `[top, right, bottom, left]` in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<[f64; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<VerticalAlign>,
    #[serde(skip)]
    pub formatter: AxisLabelFormatter,
}

impl AxisLabelOption {
    #[must_use]
    pub fn new(
        show: bool,
        margin: f64,
        defaults: TicksDefaultOption,
        formatter: AxisLabelFormatter,
    ) -> Self {
        Self {
            show,
            margin,
            rotate: None,
            hide_overlap: defaults.hide_overlap,
            text_style: defaults.text_style,
            interval: TickInterval::Auto,
            show_min_label: None,
            show_max_label: None,
            padding: None,
            vertical_align: None,
            formatter,
        }
    }

    #[must_use]
    pub fn format_value(&self, raw_value: f64) -> String {
        self.formatter.format_value(raw_value)
    }

    #[must_use]
    pub fn format_category(&self, label: &str) -> String {
        self.formatter.format_category(label)
    }
}

/// Explicit axis bound, either fixed or evaluated when the renderer asks.
#[derive(Clone)]
pub enum AxisBound {
    Value(f64),
    Deferred(DeferredBoundFn),
}

impl AxisBound {
    #[must_use]
    pub fn resolve(&self) -> f64 {
        match self {
            Self::Value(value) => *value,
            Self::Deferred(bound) => bound(),
        }
    }
}

impl fmt::Debug for AxisBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Deferred(bound) => f.debug_tuple("Deferred").field(&bound()).finish(),
        }
    }
}

impl Serialize for AxisBound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.resolve())
    }
}

/// Renderer configuration for the dimension (x) axis.
#[derive(Debug, Clone, Serialize)]
pub struct DimensionAxisOption {
    pub axis_type: AxisType,
    pub scale: bool,
    #[serde(flatten)]
    pub name: AxisNameOption,
    pub axis_tick: ToggleOption,
    pub split_line: ToggleOption,
    pub axis_line: AxisLineOption,
    pub axis_label: AxisLabelOption,
    pub min: Option<AxisBound>,
    pub max: Option<AxisBound>,
    pub min_interval: Option<f64>,
    pub max_interval: Option<f64>,
}

/// Renderer configuration for one metric (y) axis.
#[derive(Debug, Clone, Serialize)]
pub struct MetricAxisOption {
    pub show: bool,
    pub scale: bool,
    pub axis_type: AxisType,
    pub split_number: Option<u32>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    #[serde(flatten)]
    pub name: AxisNameOption,
    pub split_line: Option<SplitLineOption>,
    pub position: AxisPosition,
    pub axis_line: AxisLineOption,
    pub axis_tick: ToggleOption,
    pub axis_label: AxisLabelOption,
}

/// Resolved metric-axis bounds; `None` lets the renderer pick a rounded bound.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AxisRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl AxisRange {
    pub const UNCONSTRAINED: Self = Self {
        min: None,
        max: None,
    };
    pub const NORMALIZED: Self = Self {
        min: Some(0.0),
        max: Some(1.0),
    };

    #[must_use]
    pub fn is_unconstrained(self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Complete axis configuration of one cartesian chart.
#[derive(Debug, Clone, Serialize)]
pub struct AxesOption {
    pub x_axis: DimensionAxisOption,
    pub y_axis: SmallVec<[MetricAxisOption; 2]>,
}

impl AxesOption {
    #[must_use]
    pub fn metric_axis(&self, position: AxisPosition) -> Option<&MetricAxisOption> {
        self.y_axis.iter().find(|axis| axis.position == position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitLineVisibility {
    pub opacity: f64,
}

/// Partial option used to toggle an axis and its grid lines after build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisVisibilityOption {
    pub show: bool,
    pub split_line: SplitLineVisibility,
}

#[must_use]
pub fn create_axis_visibility_option(show: bool, split_line_visible: bool) -> AxisVisibilityOption {
    AxisVisibilityOption {
        show,
        split_line: SplitLineVisibility {
            opacity: if split_line_visible { 1.0 } else { 0.0 },
        },
    }
}
