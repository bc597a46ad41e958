use std::f64::consts::FRAC_1_SQRT_2;

use tracing::{debug, trace};

use crate::core::CartesianChartModel;

use super::{
    AxisEnabledMode, AxisLabelFormatter, AxisLabelOption, ChartMeasurements, ChartSettings,
    RenderingContext, TextStyleOption, TicksDefaultOption, VerticalAlign,
};

pub(super) const AXIS_TIME_TARGET_SPACING_PX: f64 = 72.0;
pub(super) const AXIS_TIME_MIN_TICKS: usize = 2;
pub(super) const AXIS_TIME_MAX_TICKS: usize = 24;

pub(super) fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

#[must_use]
pub fn ticks_default_option(context: &RenderingContext) -> TicksDefaultOption {
    TicksDefaultOption {
        hide_overlap: true,
        text_style: TextStyleOption {
            color: context.palette.text_dark,
            font_size: context.theme.label_font_size,
            font_weight: context.style.axis_ticks_weight,
            font_family: context.font_family.clone(),
        },
    }
}

#[must_use]
pub fn rotate_angle(mode: AxisEnabledMode) -> Option<f64> {
    mode.rotate_angle()
}

/// Tick label for a dimension axis: visibility and rotation follow `mode`.
#[must_use]
pub fn dimension_ticks_default_option(
    mode: AxisEnabledMode,
    margin: f64,
    context: &RenderingContext,
    formatter: AxisLabelFormatter,
) -> AxisLabelOption {
    let mut label = AxisLabelOption::new(
        mode.is_enabled(),
        margin,
        ticks_default_option(context),
        formatter,
    );
    label.rotate = rotate_angle(mode);
    label
}

/// Label offsets that center category labels under histogram bins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramTicksOption {
    pub show_min_label: bool,
    pub show_max_label: bool,
    /// `[top, right, bottom, left]` in pixels.
    pub padding: [f64; 4],
    pub margin: Option<f64>,
    pub vertical_align: Option<VerticalAlign>,
}

impl HistogramTicksOption {
    pub fn apply_to(self, label: &mut AxisLabelOption) {
        label.show_min_label = Some(self.show_min_label);
        label.show_max_label = Some(self.show_max_label);
        label.padding = Some(self.padding);
        if let Some(margin) = self.margin {
            label.margin = margin;
        }
        if let Some(vertical_align) = self.vertical_align {
            label.vertical_align = Some(vertical_align);
        }
    }
}

/// Offsets for one bin of `bin_width` pixels under the given label rotation.
#[must_use]
pub fn histogram_label_offsets(
    bin_width: f64,
    font_size: f64,
    mode: AxisEnabledMode,
    axis_ticks_margin_x: f64,
) -> HistogramTicksOption {
    let base = HistogramTicksOption {
        show_min_label: false,
        show_max_label: true,
        padding: [0.0, bin_width, 0.0, 0.0],
        margin: None,
        vertical_align: None,
    };

    match mode {
        AxisEnabledMode::Rotate45 => {
            let top_offset = (bin_width + font_size / 2.0) * FRAC_1_SQRT_2;
            HistogramTicksOption {
                padding: [0.0, top_offset, 0.0, 0.0],
                margin: Some(-bin_width / 2.0 + axis_ticks_margin_x),
                ..base
            }
        }
        AxisEnabledMode::Rotate90 => {
            let right_offset = bin_width / 2.0 - font_size / 2.0;
            HistogramTicksOption {
                padding: [0.0, 0.0, right_offset, 0.0],
                vertical_align: Some(VerticalAlign::Bottom),
                ..base
            }
        }
        AxisEnabledMode::Off | AxisEnabledMode::On | AxisEnabledMode::Compact => base,
    }
}

/// Histogram label offsets for the chart, or `None` when the dimension is
/// not binned.
#[must_use]
pub fn histogram_ticks_options(
    chart_model: &CartesianChartModel,
    settings: &ChartSettings,
    measurements: &ChartMeasurements,
    context: &RenderingContext,
) -> Option<HistogramTicksOption> {
    if !settings.is_histogram() {
        return None;
    }
    if chart_model.dataset_len == 0 {
        debug!("histogram dimension has no bins; skipping label offsets");
        return None;
    }

    let bin_width = measurements.boundary_width / chart_model.dataset_len as f64;
    let options = histogram_label_offsets(
        bin_width,
        context.theme.label_font_size,
        settings.x_axis_enabled,
        context.style.axis_ticks_margin_x,
    );
    trace!(
        bin_width,
        mode = %settings.x_axis_enabled,
        padding = ?options.padding,
        "histogram tick offsets"
    );
    Some(options)
}
