mod axis_name;
mod axis_option;
mod axis_option_builder;
mod axis_range;
mod axis_ticks;
mod dimension_axis;
mod json_contract;
mod measurements;
mod metric_axis;
mod render_style;
mod settings;
mod time_ticks_resolver;

pub use axis_name::{axis_name_default_option, axis_name_gap};
pub use axis_option::{
    AxesOption, AxisBound, AxisLabelFormatter, AxisLabelOption, AxisLineOption, AxisNameOption,
    AxisRange, AxisType, AxisVisibilityOption, CategoryLabelFn, DeferredBoundFn,
    DimensionAxisOption, MetricAxisOption, NameLocation, RawValueLabelFn, SplitLineOption,
    SplitLineVisibility, TextStyleOption, TickInterval, TicksDefaultOption, ToggleOption,
    VerticalAlign, create_axis_visibility_option,
};
pub use axis_option_builder::{AxisOptionBuilder, build_axes};
pub use axis_range::{custom_axis_range, scaled_min_and_max, y_axis_range};
pub use axis_ticks::{
    HistogramTicksOption, dimension_ticks_default_option, histogram_label_offsets,
    histogram_ticks_options, rotate_angle, ticks_default_option,
};
pub use dimension_axis::{
    build_categorical_dimension_axis, build_dimension_axis, build_numeric_dimension_axis,
    build_time_series_dimension_axis, format_category_label,
};
pub use json_contract::{AXES_OPTION_JSON_SCHEMA_V1, AxesOptionJsonContractV1};
pub use measurements::{ChartBounds, ChartMeasurements, Padding, TicksDimensions};
pub use metric_axis::{build_metric_axes, build_metric_axis, metric_axis_name_rotation};
pub use render_style::{
    CartesianTheme, ChartStyle, Color, ColorPalette, RenderingContext, SplitLineStyle,
};
pub use settings::{AxisEnabledMode, ChartSettings, XAxisScale};
pub use time_ticks_resolver::{
    CanRenderFn, IntervalTicksResolver, TimeSeriesTicksOptions, TimeSeriesTicksResolver,
    is_aligned_to,
};
