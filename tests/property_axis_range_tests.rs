use std::sync::Arc;

use cartesian_axis::api::{
    AxisEnabledMode, AxisRange, ChartBounds, ChartMeasurements, ChartSettings, Padding,
    RenderingContext, TicksDimensions, build_metric_axis, build_numeric_dimension_axis,
    custom_axis_range, metric_axis_name_rotation,
};
use cartesian_axis::core::{
    AxisPosition, Extent, NumericAxisScaleTransforms, NumericXAxisModel, YAxisModel,
};
use proptest::prelude::*;

fn measurements() -> ChartMeasurements {
    ChartMeasurements::new(
        Padding::default(),
        TicksDimensions::default(),
        ChartBounds {
            top: 0.0,
            left: 0.0,
            bottom: 400.0,
            right: 800.0,
        },
        AxisEnabledMode::On,
    )
}

proptest! {
    #[test]
    fn auto_range_normalized_axis_is_unit_interval(
        min in -1_000.0f64..1_000.0,
        span in 0.0f64..1_000.0,
        custom_min in proptest::option::of(-1_000.0f64..1_000.0),
        custom_max in proptest::option::of(-1_000.0f64..1_000.0)
    ) {
        let extent = Extent::new(min, min + span).expect("valid extent");
        let model = YAxisModel::new(extent, Arc::new(|value: f64| value.to_string()))
            .normalized(true);
        let settings = ChartSettings {
            y_axis_min: custom_min,
            y_axis_max: custom_max,
            ..ChartSettings::default()
        };

        let axis = build_metric_axis(
            &model,
            &NumericAxisScaleTransforms::linear(),
            30.0,
            &settings,
            AxisPosition::Left,
            true,
            &RenderingContext::default(),
        );

        prop_assert_eq!(axis.min, Some(0.0));
        prop_assert_eq!(axis.max, Some(1.0));
    }

    #[test]
    fn custom_range_only_widens_extent(
        min in -1_000.0f64..1_000.0,
        span in 0.0f64..1_000.0,
        custom_min in proptest::option::of(-2_000.0f64..2_000.0),
        custom_max in proptest::option::of(-2_000.0f64..2_000.0)
    ) {
        let extent = Extent::new(min, min + span).expect("valid extent");
        let range = custom_axis_range(extent, custom_min, custom_max, false);

        if let Some(bound) = range.min {
            prop_assert!(bound < extent.min);
            prop_assert_eq!(Some(bound), custom_min);
        } else {
            prop_assert!(custom_min.is_none_or(|value| value >= extent.min));
        }
        if let Some(bound) = range.max {
            prop_assert!(bound > extent.max);
            prop_assert_eq!(Some(bound), custom_max);
        } else {
            prop_assert!(custom_max.is_none_or(|value| value <= extent.max));
        }
    }

    #[test]
    fn normalized_custom_range_is_scaled_to_fraction(
        custom_min in -1_000.0f64..1_000.0,
        custom_max in -1_000.0f64..1_000.0
    ) {
        let extent = Extent::new(0.0, 1.0).expect("valid extent");
        let range = custom_axis_range(extent, Some(custom_min), Some(custom_max), true);
        prop_assert_eq!(
            range,
            AxisRange {
                min: Some(custom_min / 100.0),
                max: Some(custom_max / 100.0),
            }
        );
    }

    #[test]
    fn padded_numeric_axis_range_extends_half_interval(
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.0f64..1_000_000.0,
        interval in 0.001f64..10_000.0
    ) {
        let extent = Extent::new(min, min + span).expect("valid extent");
        let model = NumericXAxisModel::new(
            extent,
            interval,
            Arc::new(|value: f64| value.to_string()),
        )
        .expect("valid numeric model")
        .with_padding(true);

        let axis = build_numeric_dimension_axis(
            &model,
            &ChartSettings::default(),
            &measurements(),
            &RenderingContext::default(),
        );

        let axis_min = axis.min.as_ref().expect("padded min").resolve();
        let axis_max = axis.max.as_ref().expect("padded max").resolve();
        prop_assert!((axis_min - (extent.min - interval / 2.0)).abs() <= 1e-9);
        prop_assert!((axis_max - (extent.max + interval / 2.0)).abs() <= 1e-9);
        prop_assert_eq!(axis.axis_label.format_value(axis_min - interval), "");
    }

    #[test]
    fn name_rotation_depends_only_on_position(is_right in any::<bool>()) {
        let position = if is_right { AxisPosition::Right } else { AxisPosition::Left };
        let expected = if is_right { Some(-90.0) } else { None };
        prop_assert_eq!(metric_axis_name_rotation(position), expected);
    }
}
