use std::sync::Arc;

use smallvec::SmallVec;
use tracing::debug;

use crate::core::{AxisPosition, CartesianChartModel, NumericAxisScaleTransforms, YAxisModel};

use super::axis_name::{axis_name_default_option, axis_name_gap};
use super::axis_range::y_axis_range;
use super::axis_ticks::ticks_default_option;
use super::{
    AxisLabelFormatter, AxisLabelOption, AxisLineOption, AxisType, ChartMeasurements,
    ChartSettings, MetricAxisOption, RenderingContext, SplitLineOption, ToggleOption,
};

/// Name rotation for a metric axis; right-side names read top to bottom.
#[must_use]
pub fn metric_axis_name_rotation(position: AxisPosition) -> Option<f64> {
    match position {
        AxisPosition::Right => Some(-90.0),
        AxisPosition::Left => None,
    }
}

#[must_use]
pub fn build_metric_axis(
    axis_model: &YAxisModel,
    transforms: &NumericAxisScaleTransforms,
    ticks_width: f64,
    settings: &ChartSettings,
    position: AxisPosition,
    has_split_line: bool,
    context: &RenderingContext,
) -> MetricAxisOption {
    let name_gap = axis_name_gap(ticks_width, context);
    let range = y_axis_range(axis_model, transforms, settings);

    let split_line = settings.y_axis_enabled.then(|| SplitLineOption {
        dash: context.style.split_line_dash,
        opacity: if has_split_line { 1.0 } else { 0.0 },
        color: context.theme.split_line.color,
        width: context.theme.split_line.width,
    });

    let value_formatter = Arc::clone(&axis_model.formatter);
    let transforms = transforms.clone();
    let formatter = AxisLabelFormatter::RawValue(Arc::new(move |raw_value: f64| {
        value_formatter(transforms.from_axis_value(raw_value))
    }));

    MetricAxisOption {
        show: true,
        scale: settings.y_axis_unpin_from_zero,
        axis_type: AxisType::Value,
        split_number: axis_model.split_number,
        min: range.min,
        max: range.max,
        name: axis_name_default_option(
            context,
            name_gap,
            axis_model.label.clone(),
            metric_axis_name_rotation(position),
        ),
        split_line,
        position,
        axis_line: AxisLineOption {
            show: false,
            color: None,
        },
        axis_tick: ToggleOption::HIDDEN,
        axis_label: AxisLabelOption::new(
            settings.y_axis_enabled,
            context.style.axis_ticks_margin_y,
            ticks_default_option(context),
            formatter,
        ),
    }
}

/// Builds left then right metric axes; absent axis models are skipped.
///
/// Only one axis draws split lines: the left one when present, otherwise the
/// right one.
#[must_use]
pub fn build_metric_axes(
    chart_model: &CartesianChartModel,
    measurements: &ChartMeasurements,
    settings: &ChartSettings,
    context: &RenderingContext,
) -> SmallVec<[MetricAxisOption; 2]> {
    let mut axes = SmallVec::new();
    let ticks = measurements.ticks_dimensions;
    let transforms = chart_model.resolve_y_axis_scale_transforms(settings.y_axis_scale);

    if let Some(left_axis_model) = &chart_model.left_axis_model {
        axes.push(build_metric_axis(
            left_axis_model,
            &transforms,
            ticks.y_ticks_width_left,
            settings,
            AxisPosition::Left,
            true,
            context,
        ));
    }

    if let Some(right_axis_model) = &chart_model.right_axis_model {
        let is_only_axis = chart_model.left_axis_model.is_none();
        axes.push(build_metric_axis(
            right_axis_model,
            &transforms,
            ticks.y_ticks_width_right,
            settings,
            AxisPosition::Right,
            is_only_axis,
            context,
        ));
    }

    debug!(count = axes.len(), "built metric axes");
    axes
}
