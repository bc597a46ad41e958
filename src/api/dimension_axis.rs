use std::sync::Arc;

use tracing::debug;

use crate::core::primitives::{format_iso_timestamp, parse_number_value};
use crate::core::{
    CartesianChartModel, CategoricalXAxisModel, ColumnDescriptor, LabelValue, NumericXAxisModel,
    TimeSeriesXAxisModel, XAxisModel,
};

use super::axis_name::{axis_name_default_option, axis_name_gap};
use super::axis_ticks::{dimension_ticks_default_option, histogram_ticks_options};
use super::{
    AxisBound, AxisEnabledMode, AxisLabelFormatter, AxisLabelOption, AxisLineOption,
    AxisNameOption, AxisType, ChartMeasurements, ChartSettings, DimensionAxisOption,
    RenderingContext, TickInterval, TimeSeriesTicksResolver, ToggleOption,
};

/// Pads a tick label with one space per side so neighbouring labels never touch.
fn pad_tick_label(label: &str) -> String {
    format!(" {label} ")
}

/// Options shared by every dimension axis variant.
struct CommonDimensionOptions {
    name: AxisNameOption,
    axis_line: AxisLineOption,
}

fn common_dimension_axis_options(
    measurements: &ChartMeasurements,
    settings: &ChartSettings,
    context: &RenderingContext,
) -> CommonDimensionOptions {
    let name_gap = axis_name_gap(measurements.ticks_dimensions.x_ticks_height, context);
    let name = if settings.x_axis_labels_enabled {
        settings.x_axis_title_text.clone()
    } else {
        None
    };

    CommonDimensionOptions {
        name: axis_name_default_option(context, name_gap, name, None),
        axis_line: AxisLineOption {
            show: settings.x_axis_enabled.is_enabled(),
            color: Some(context.palette.border),
        },
    }
}

fn dimension_axis(
    axis_type: AxisType,
    common: CommonDimensionOptions,
    axis_label: AxisLabelOption,
) -> DimensionAxisOption {
    DimensionAxisOption {
        axis_type,
        scale: false,
        name: common.name,
        axis_tick: ToggleOption::HIDDEN,
        split_line: ToggleOption::HIDDEN,
        axis_line: common.axis_line,
        axis_label,
        min: None,
        max: None,
        min_interval: None,
        max_interval: None,
    }
}

/// Builds the dimension axis for whichever x-axis model variant the chart has.
#[must_use]
pub fn build_dimension_axis(
    chart_model: &CartesianChartModel,
    width: f64,
    settings: &ChartSettings,
    measurements: &ChartMeasurements,
    has_timeline_events: bool,
    resolver: &dyn TimeSeriesTicksResolver,
    context: &RenderingContext,
) -> DimensionAxisOption {
    debug!(
        kind = chart_model.x_axis_model.kind_name(),
        width, "building dimension axis"
    );
    match &chart_model.x_axis_model {
        XAxisModel::Numeric(axis_model) => {
            build_numeric_dimension_axis(axis_model, settings, measurements, context)
        }
        XAxisModel::TimeSeries(axis_model) => build_time_series_dimension_axis(
            axis_model,
            width,
            has_timeline_events,
            settings,
            measurements,
            resolver,
            context,
        ),
        XAxisModel::Categorical(axis_model) => build_categorical_dimension_axis(
            chart_model,
            axis_model,
            settings,
            measurements,
            context,
        ),
    }
}

#[must_use]
pub fn build_numeric_dimension_axis(
    axis_model: &NumericXAxisModel,
    settings: &ChartSettings,
    measurements: &ChartMeasurements,
    context: &RenderingContext,
) -> DimensionAxisOption {
    let extent = axis_model.extent;
    let is_padded = axis_model.is_padded;
    let axis_padding = axis_model.interval / 2.0;

    let model = axis_model.clone();
    let formatter = AxisLabelFormatter::RawValue(Arc::new(move |raw_value: f64| {
        if is_padded && extent.excludes(raw_value) {
            return String::new();
        }
        pad_tick_label(&(model.formatter)(model.from_axis_value(raw_value)))
    }));

    let common = common_dimension_axis_options(measurements, settings, context);
    let axis_label = dimension_ticks_default_option(
        settings.x_axis_enabled,
        context.style.axis_ticks_margin_x,
        context,
        formatter,
    );

    let mut axis = dimension_axis(AxisType::Value, common, axis_label);
    axis.scale = true;
    if is_padded {
        axis.min = Some(AxisBound::Deferred(Arc::new(move || extent.min - axis_padding)));
        axis.max = Some(AxisBound::Deferred(Arc::new(move || extent.max + axis_padding)));
    }
    axis.min_interval = Some(axis_model.interval);
    axis.max_interval = axis_model.ticks_max_interval;
    axis
}

#[must_use]
pub fn build_time_series_dimension_axis(
    axis_model: &TimeSeriesXAxisModel,
    width: f64,
    has_timeline_events: bool,
    settings: &ChartSettings,
    measurements: &ChartMeasurements,
    resolver: &dyn TimeSeriesTicksResolver,
    context: &RenderingContext,
) -> DimensionAxisOption {
    let ticks = resolver.resolve(axis_model, width);

    let margin = context.style.axis_ticks_margin_x
        + if has_timeline_events {
            context.style.timeline_events_height
        } else {
            0.0
        };

    let model = axis_model.clone();
    let tick_formatter = Arc::clone(&ticks.formatter);
    let can_render = Arc::clone(&ticks.can_render);
    let formatter = AxisLabelFormatter::RawValue(Arc::new(move |raw_value: f64| {
        let Some(value) = model.from_axis_value(raw_value) else {
            return String::new();
        };
        if !can_render(value) {
            return String::new();
        }
        pad_tick_label(&tick_formatter(&format_iso_timestamp(value)))
    }));

    let common = common_dimension_axis_options(measurements, settings, context);
    let axis_label =
        dimension_ticks_default_option(settings.x_axis_enabled, margin, context, formatter);

    let mut axis = dimension_axis(AxisType::Time, common, axis_label);
    axis.min = Some(AxisBound::Value(ticks.x_domain_padded.0));
    axis.max = Some(AxisBound::Value(ticks.x_domain_padded.1));
    axis.min_interval = Some(ticks.min_interval);
    axis.max_interval = ticks.max_interval;
    axis
}

/// Formats a category label, treating numeric-looking labels of numeric
/// columns as numbers.
#[must_use]
pub fn format_category_label(
    axis_model: &CategoricalXAxisModel,
    column: &ColumnDescriptor,
    label: &str,
) -> String {
    let formatted = match parse_number_value(label) {
        Some(number) if column.base_type.is_numeric() => {
            axis_model.format(LabelValue::Number(number))
        }
        _ => axis_model.format(LabelValue::Text(label)),
    };
    pad_tick_label(&formatted)
}

#[must_use]
pub fn build_categorical_dimension_axis(
    chart_model: &CartesianChartModel,
    axis_model: &CategoricalXAxisModel,
    chart_settings: &ChartSettings,
    measurements: &ChartMeasurements,
    context: &RenderingContext,
) -> DimensionAxisOption {
    let auto_axis_enabled: AxisEnabledMode = measurements.axis_enabled_setting;
    let settings = ChartSettings {
        x_axis_enabled: auto_axis_enabled,
        ..chart_settings.clone()
    };

    let model = axis_model.clone();
    let column = chart_model.dimension_column.clone();
    let formatter = AxisLabelFormatter::Category(Arc::new(move |label: &str| {
        format_category_label(&model, &column, label)
    }));

    let common = common_dimension_axis_options(measurements, &settings, context);
    let mut axis_label = dimension_ticks_default_option(
        settings.x_axis_enabled,
        context.style.axis_ticks_margin_x,
        context,
        formatter,
    );
    if let Some(histogram) = histogram_ticks_options(chart_model, &settings, measurements, context)
    {
        histogram.apply_to(&mut axis_label);
    }
    axis_label.interval = TickInterval::All;

    dimension_axis(AxisType::Category, common, axis_label)
}
