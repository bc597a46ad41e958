use std::sync::Arc;

use cartesian_axis::api::{
    AxisEnabledMode, AxisType, ChartBounds, ChartMeasurements, ChartSettings, Padding,
    RenderingContext, TicksDimensions, build_metric_axes, build_metric_axis,
};
use cartesian_axis::core::{
    AxisPosition, BaseType, CartesianChartModel, ColumnDescriptor, Extent,
    NumericAxisScaleTransforms, NumericXAxisModel, XAxisModel, YAxisModel, YAxisScale,
};
use cartesian_axis::{ChartResult, build_axes};

fn measurements() -> ChartMeasurements {
    ChartMeasurements::new(
        Padding::default(),
        TicksDimensions {
            y_ticks_width_left: 30.0,
            y_ticks_width_right: 40.0,
            x_ticks_height: 16.0,
        },
        ChartBounds {
            top: 0.0,
            left: 0.0,
            bottom: 300.0,
            right: 600.0,
        },
        AxisEnabledMode::On,
    )
}

fn y_model(min: f64, max: f64) -> ChartResult<YAxisModel> {
    Ok(YAxisModel::new(
        Extent::new(min, max)?,
        Arc::new(|value: f64| format!("{value}")),
    ))
}

fn chart_with_axes(left: Option<YAxisModel>, right: Option<YAxisModel>) -> CartesianChartModel {
    let x_axis_model = NumericXAxisModel::new(
        Extent::new(0.0, 10.0).expect("extent"),
        1.0,
        Arc::new(|value: f64| format!("{value}")),
    )
    .expect("numeric model");
    let mut chart = CartesianChartModel::new(
        XAxisModel::Numeric(x_axis_model),
        ColumnDescriptor::new("x", BaseType::Integer),
    );
    if let Some(left) = left {
        chart = chart.with_left_axis(left);
    }
    if let Some(right) = right {
        chart = chart.with_right_axis(right);
    }
    chart
}

#[test]
fn normalized_left_and_plain_right_axes_end_to_end() {
    let context = RenderingContext::default();
    let left = y_model(0.0, 1.0).expect("left").normalized(true);
    let right = y_model(0.0, 50.0).expect("right");
    let chart = chart_with_axes(Some(left), Some(right));
    let settings = ChartSettings::default().with_y_axis_custom_range(Some(20.0), Some(80.0));

    let axes = build_axes(&chart, 600.0, &measurements(), &settings, false, &context);

    assert_eq!(axes.y_axis.len(), 2);
    let left = axes.metric_axis(AxisPosition::Left).expect("left axis");
    assert_eq!(left.min, Some(0.2));
    assert_eq!(left.max, Some(0.8));
    assert_eq!(left.split_line.expect("left split line").opacity, 1.0);

    let right = axes.metric_axis(AxisPosition::Right).expect("right axis");
    assert_eq!(right.split_line.expect("right split line").opacity, 0.0);
    // Bounds are chart-wide: 20 lies inside [0, 50], 80 widens it.
    assert_eq!(right.min, None);
    assert_eq!(right.max, Some(80.0));

    let unbounded = ChartSettings::default().with_y_axis_custom_range(None, None);
    let axes = build_axes(&chart, 600.0, &measurements(), &unbounded, false, &context);
    let right = axes.metric_axis(AxisPosition::Right).expect("right axis");
    assert_eq!(right.min, None);
    assert_eq!(right.max, None);
}

#[test]
fn sole_right_axis_draws_split_lines() {
    let context = RenderingContext::default();
    let chart = chart_with_axes(None, Some(y_model(0.0, 50.0).expect("right")));

    let axes = build_metric_axes(&chart, &measurements(), &ChartSettings::default(), &context);

    assert_eq!(axes.len(), 1);
    assert_eq!(axes[0].position, AxisPosition::Right);
    assert_eq!(axes[0].split_line.expect("split line").opacity, 1.0);
}

#[test]
fn missing_axis_models_produce_no_metric_axes() {
    let context = RenderingContext::default();
    let chart = chart_with_axes(None, None);
    let axes = build_metric_axes(&chart, &measurements(), &ChartSettings::default(), &context);
    assert!(axes.is_empty());
}

#[test]
fn disabled_y_axis_hides_labels_and_split_lines() {
    let context = RenderingContext::default();
    let axis = build_metric_axis(
        &y_model(0.0, 10.0).expect("model"),
        &NumericAxisScaleTransforms::linear(),
        30.0,
        &ChartSettings::default().with_y_axis_enabled(false),
        AxisPosition::Left,
        true,
        &context,
    );

    assert!(axis.show);
    assert!(axis.split_line.is_none());
    assert!(!axis.axis_label.show);
    assert!(!axis.axis_line.show);
    assert!(!axis.axis_tick.show);
}

#[test]
fn metric_axis_name_and_layout_follow_position() {
    let context = RenderingContext::default();
    let model = y_model(0.0, 10.0)
        .expect("model")
        .with_label("Revenue")
        .with_split_number(4);
    let settings = ChartSettings::default().with_y_axis_unpin_from_zero(true);

    let right = build_metric_axis(
        &model,
        &NumericAxisScaleTransforms::linear(),
        40.0,
        &settings,
        AxisPosition::Right,
        false,
        &context,
    );

    assert_eq!(right.axis_type, AxisType::Value);
    assert!(right.scale);
    assert_eq!(right.split_number, Some(4));
    assert_eq!(right.name.name.as_deref(), Some("Revenue"));
    assert_eq!(right.name.name_rotate, Some(-90.0));
    assert_eq!(right.name.name_gap, 40.0 + context.style.axis_name_margin);
    assert_eq!(right.axis_label.margin, context.style.axis_ticks_margin_y);

    let left = build_metric_axis(
        &model,
        &NumericAxisScaleTransforms::linear(),
        30.0,
        &ChartSettings::default(),
        AxisPosition::Left,
        true,
        &context,
    );
    assert!(!left.scale);
    assert_eq!(left.name.name_rotate, None);
}

#[test]
fn metric_labels_format_semantic_values() {
    let context = RenderingContext::default();
    let axis = build_metric_axis(
        &y_model(0.0, 100.0).expect("model"),
        &NumericAxisScaleTransforms::pow(),
        30.0,
        &ChartSettings::default(),
        AxisPosition::Left,
        true,
        &context,
    );

    assert_eq!(axis.axis_label.format_value(3.0), "9");
    assert_eq!(axis.axis_label.format_value(-2.0), "-4");
}

#[test]
fn custom_bounds_are_mapped_through_scale_transforms() {
    let context = RenderingContext::default();
    let chart = chart_with_axes(Some(y_model(1.0, 3.0).expect("left")), None)
        .with_y_axis_scale_transforms(NumericAxisScaleTransforms::log());
    let settings = ChartSettings::default().with_y_axis_custom_range(Some(1.0), Some(100.0));

    let axes = build_metric_axes(&chart, &measurements(), &settings, &context);

    // Extent is in axis units: log10(1) = 0 widens it, log10(100) = 2 does not.
    assert_eq!(axes[0].min, Some(0.0));
    assert_eq!(axes[0].max, None);
}

#[test]
fn auto_range_ignores_custom_bounds() {
    let context = RenderingContext::default();
    let chart = chart_with_axes(Some(y_model(0.0, 10.0).expect("left")), None);
    let settings = ChartSettings {
        y_axis_min: Some(-100.0),
        y_axis_max: Some(100.0),
        ..ChartSettings::default()
    };

    let axes = build_metric_axes(&chart, &measurements(), &settings, &context);
    assert_eq!(axes[0].min, None);
    assert_eq!(axes[0].max, None);
}

#[test]
fn y_axis_scale_setting_maps_custom_bounds() {
    let context = RenderingContext::default();
    let chart = chart_with_axes(Some(y_model(0.0, 2.0).expect("left")), None);
    let settings = ChartSettings::from_json_str(
        r#"{
            "graph.y_axis.scale": "log",
            "graph.y_axis.auto_range": false,
            "graph.y_axis.max": 1000
        }"#,
    )
    .expect("settings json");

    let axes = build_axes(&chart, 600.0, &measurements(), &settings, false, &context);

    let max = axes.y_axis[0].max.expect("log-scaled max");
    assert!((max - 3.0).abs() <= 1e-9);
    assert_eq!(axes.y_axis[0].axis_label.format_value(2.0), "100");
}

#[test]
fn explicit_chart_transforms_take_precedence_over_scale_setting() {
    let context = RenderingContext::default();
    let chart = chart_with_axes(Some(y_model(0.0, 2.0).expect("left")), None)
        .with_y_axis_scale(YAxisScale::Pow);
    let settings = ChartSettings::default()
        .with_y_axis_scale(YAxisScale::Log)
        .with_y_axis_custom_range(None, Some(16.0));

    let axes = build_metric_axes(&chart, &measurements(), &settings, &context);

    assert_eq!(axes[0].max, Some(4.0));
}
