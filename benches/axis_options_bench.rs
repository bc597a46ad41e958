use cartesian_axis::api::{
    AxisEnabledMode, AxisOptionBuilder, ChartBounds, ChartMeasurements, Padding,
    RenderingContext, TicksDimensions, XAxisScale,
};
use cartesian_axis::core::{
    BaseType, CartesianChartModel, CategoricalXAxisModel, ColumnDescriptor, Extent, LabelValue,
    TimeSeriesInterval, TimeSeriesXAxisModel, TimeUnit, XAxisModel, YAxisModel,
};
use cartesian_axis::ChartSettings;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;

fn measurements() -> ChartMeasurements {
    ChartMeasurements::new(
        Padding::default(),
        TicksDimensions {
            y_ticks_width_left: 32.0,
            y_ticks_width_right: 28.0,
            x_ticks_height: 16.0,
        },
        ChartBounds {
            top: 0.0,
            left: 0.0,
            bottom: 900.0,
            right: 1600.0,
        },
        AxisEnabledMode::Rotate45,
    )
}

fn y_axis() -> YAxisModel {
    YAxisModel::new(
        Extent::new(0.0, 2_500.0).expect("valid extent"),
        Arc::new(|value: f64| format!("{value:.0}")),
    )
}

fn bench_time_series_axes(c: &mut Criterion) {
    let x_axis_model = TimeSeriesXAxisModel::new(
        Extent::new(1.6e12, 1.7e12).expect("valid extent"),
        TimeSeriesInterval::new(TimeUnit::Day, 1),
        Arc::new(|iso: &str| iso[..10].to_owned()),
    )
    .with_padding(true);
    let chart = CartesianChartModel::new(
        XAxisModel::TimeSeries(x_axis_model),
        ColumnDescriptor::new("created_at", BaseType::DateTime),
    )
    .with_left_axis(y_axis())
    .with_right_axis(y_axis());
    let builder = AxisOptionBuilder::new(RenderingContext::default());
    let measurements = measurements();
    let settings = ChartSettings::default();

    c.bench_function("time_series_axes_build_and_format", |b| {
        b.iter(|| {
            let axes = builder.build(
                black_box(&chart),
                black_box(1600.0),
                &measurements,
                &settings,
                true,
            );
            let _ = axes.x_axis.axis_label.format_value(black_box(1.65e12));
        })
    });
}

fn bench_histogram_axes_json(c: &mut Criterion) {
    let labels: Vec<String> = (0..2_000).map(|bin| (bin * 5).to_string()).collect();
    let x_axis_model = CategoricalXAxisModel::new(
        labels.iter().map(String::as_str),
        Arc::new(|value: LabelValue<'_>| match value {
            LabelValue::Number(number) => format!("{number:.0}"),
            LabelValue::Text(text) => text.to_owned(),
        }),
    );
    let chart = CartesianChartModel::new(
        XAxisModel::Categorical(x_axis_model),
        ColumnDescriptor::new("bucket", BaseType::Integer),
    )
    .with_left_axis(y_axis())
    .with_dataset_len(labels.len());
    let builder = AxisOptionBuilder::new(RenderingContext::default());
    let measurements = measurements();
    let settings = ChartSettings::default().with_x_axis_scale(XAxisScale::Histogram);

    c.bench_function("histogram_axes_json_2k", |b| {
        b.iter(|| {
            let axes = builder.build(black_box(&chart), 1600.0, &measurements, &settings, false);
            let _ = axes
                .to_json_contract_v1_pretty()
                .expect("axes json should succeed");
        })
    });
}

criterion_group!(benches, bench_time_series_axes, bench_histogram_axes_json);
criterion_main!(benches);
