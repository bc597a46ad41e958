pub mod axis_model;
pub mod chart_model;
pub mod primitives;
pub mod scale;
pub mod types;

pub use axis_model::{
    BaseType, CategoricalXAxisModel, CategoryFormatterFn, ColumnDescriptor, LabelValue,
    NumericFormatterFn, NumericXAxisModel, TimeSeriesInterval, TimeSeriesXAxisModel, TimeUnit,
    TimestampFormatterFn, XAxisModel, YAxisModel,
};
pub use chart_model::CartesianChartModel;
pub use scale::{NumericAxisScaleTransforms, YAxisScale};
pub use types::{AxisPosition, Extent};
