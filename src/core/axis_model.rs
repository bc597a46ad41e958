use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{axis_millis_to_datetime, require_finite};
use crate::core::scale::NumericAxisScaleTransforms;
use crate::core::types::Extent;
use crate::error::{ChartError, ChartResult};

pub type NumericFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;
/// Receives an ISO `YYYY-MM-DDTHH:mm:ssZ` timestamp.
pub type TimestampFormatterFn = Arc<dyn Fn(&str) -> String + Send + Sync + 'static>;
pub type CategoryFormatterFn = Arc<dyn Fn(LabelValue<'_>) -> String + Send + Sync + 'static>;
/// Returns `None` when the coordinate has no calendar value.
pub type DateTimeFromAxisFn = Arc<dyn Fn(f64) -> Option<DateTime<Utc>> + Send + Sync + 'static>;

/// Category tick value handed to a categorical formatter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelValue<'a> {
    Number(f64),
    Text(&'a str),
}

/// Semantic base type of the dimension column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BaseType {
    Integer,
    BigInteger,
    Float,
    Decimal,
    Number,
    #[default]
    Text,
    Boolean,
    Date,
    DateTime,
    Time,
    Other,
}

impl BaseType {
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Integer | Self::BigInteger | Self::Float | Self::Decimal | Self::Number
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub base_type: BaseType,
}

impl ColumnDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, base_type: BaseType) -> Self {
        Self {
            name: name.into(),
            base_type,
        }
    }
}

/// Calendar granularity of a time-series dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl TimeUnit {
    pub const ALL: [Self; 8] = [
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Week,
        Self::Month,
        Self::Quarter,
        Self::Year,
    ];

    /// Nominal duration in milliseconds; months and years use their average length.
    #[must_use]
    pub fn approx_millis(self) -> f64 {
        const SECOND: f64 = 1_000.0;
        const DAY: f64 = 86_400.0 * SECOND;
        match self {
            Self::Second => SECOND,
            Self::Minute => 60.0 * SECOND,
            Self::Hour => 3_600.0 * SECOND,
            Self::Day => DAY,
            Self::Week => 7.0 * DAY,
            Self::Month => 30.0 * DAY,
            Self::Quarter => 91.0 * DAY,
            Self::Year => 365.0 * DAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSeriesInterval {
    pub unit: TimeUnit,
    pub count: u32,
}

impl TimeSeriesInterval {
    #[must_use]
    pub fn new(unit: TimeUnit, count: u32) -> Self {
        Self {
            unit,
            count: count.max(1),
        }
    }

    #[must_use]
    pub fn approx_millis(self) -> f64 {
        self.unit.approx_millis() * f64::from(self.count)
    }
}

/// Continuous numeric dimension.
#[derive(Clone)]
pub struct NumericXAxisModel {
    pub extent: Extent,
    pub interval: f64,
    pub is_padded: bool,
    pub ticks_max_interval: Option<f64>,
    pub formatter: NumericFormatterFn,
    pub transforms: NumericAxisScaleTransforms,
}

impl NumericXAxisModel {
    /// Creates an unpadded model with identity axis mapping.
    pub fn new(extent: Extent, interval: f64, formatter: NumericFormatterFn) -> ChartResult<Self> {
        let interval = require_finite(interval, "numeric axis interval")?;
        if interval <= 0.0 {
            return Err(ChartError::InvalidData(
                "numeric axis interval must be > 0".to_owned(),
            ));
        }
        Ok(Self {
            extent,
            interval,
            is_padded: false,
            ticks_max_interval: None,
            formatter,
            transforms: NumericAxisScaleTransforms::linear(),
        })
    }

    #[must_use]
    pub fn with_padding(mut self, is_padded: bool) -> Self {
        self.is_padded = is_padded;
        self
    }

    #[must_use]
    pub fn with_ticks_max_interval(mut self, ticks_max_interval: f64) -> Self {
        self.ticks_max_interval = Some(ticks_max_interval);
        self
    }

    #[must_use]
    pub fn with_transforms(mut self, transforms: NumericAxisScaleTransforms) -> Self {
        self.transforms = transforms;
        self
    }

    #[must_use]
    pub fn from_axis_value(&self, raw_value: f64) -> f64 {
        self.transforms.from_axis_value(raw_value)
    }
}

impl fmt::Debug for NumericXAxisModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericXAxisModel")
            .field("extent", &self.extent)
            .field("interval", &self.interval)
            .field("is_padded", &self.is_padded)
            .field("ticks_max_interval", &self.ticks_max_interval)
            .finish_non_exhaustive()
    }
}

/// Temporal dimension; extent and axis coordinates are epoch milliseconds.
#[derive(Clone)]
pub struct TimeSeriesXAxisModel {
    pub extent: Extent,
    pub interval: TimeSeriesInterval,
    pub is_padded: bool,
    pub ticks_max_interval: Option<f64>,
    pub formatter: TimestampFormatterFn,
    pub from_axis: DateTimeFromAxisFn,
}

impl TimeSeriesXAxisModel {
    #[must_use]
    pub fn new(
        extent: Extent,
        interval: TimeSeriesInterval,
        formatter: TimestampFormatterFn,
    ) -> Self {
        Self {
            extent,
            interval,
            is_padded: false,
            ticks_max_interval: None,
            formatter,
            from_axis: Arc::new(axis_millis_to_datetime),
        }
    }

    #[must_use]
    pub fn with_padding(mut self, is_padded: bool) -> Self {
        self.is_padded = is_padded;
        self
    }

    #[must_use]
    pub fn with_ticks_max_interval(mut self, ticks_max_interval: f64) -> Self {
        self.ticks_max_interval = Some(ticks_max_interval);
        self
    }

    #[must_use]
    pub fn with_from_axis(mut self, from_axis: DateTimeFromAxisFn) -> Self {
        self.from_axis = from_axis;
        self
    }

    #[must_use]
    pub fn from_axis_value(&self, raw_value: f64) -> Option<DateTime<Utc>> {
        (self.from_axis)(raw_value)
    }
}

impl fmt::Debug for TimeSeriesXAxisModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeSeriesXAxisModel")
            .field("extent", &self.extent)
            .field("interval", &self.interval)
            .field("is_padded", &self.is_padded)
            .field("ticks_max_interval", &self.ticks_max_interval)
            .finish_non_exhaustive()
    }
}

/// Ordinal dimension with unique, insertion-ordered labels.
#[derive(Clone)]
pub struct CategoricalXAxisModel {
    pub categories: IndexSet<String>,
    pub formatter: CategoryFormatterFn,
}

impl CategoricalXAxisModel {
    #[must_use]
    pub fn new<I, S>(categories: I, formatter: CategoryFormatterFn) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            formatter,
        }
    }

    #[must_use]
    pub fn format(&self, value: LabelValue<'_>) -> String {
        (self.formatter)(value)
    }
}

impl fmt::Debug for CategoricalXAxisModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoricalXAxisModel")
            .field("categories", &self.categories)
            .finish_non_exhaustive()
    }
}

/// Dimension axis domain, dispatched on by the dimension axis builder.
#[derive(Debug, Clone)]
pub enum XAxisModel {
    Numeric(NumericXAxisModel),
    TimeSeries(TimeSeriesXAxisModel),
    Categorical(CategoricalXAxisModel),
}

impl XAxisModel {
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Numeric(_) => "numeric",
            Self::TimeSeries(_) => "time-series",
            Self::Categorical(_) => "categorical",
        }
    }
}

/// Metric axis domain for one side of the plot.
#[derive(Clone)]
pub struct YAxisModel {
    pub extent: Extent,
    pub label: Option<String>,
    pub split_number: Option<u32>,
    pub is_normalized: bool,
    pub formatter: NumericFormatterFn,
}

impl YAxisModel {
    #[must_use]
    pub fn new(extent: Extent, formatter: NumericFormatterFn) -> Self {
        Self {
            extent,
            label: None,
            split_number: None,
            is_normalized: false,
            formatter,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_split_number(mut self, split_number: u32) -> Self {
        self.split_number = Some(split_number);
        self
    }

    #[must_use]
    pub fn normalized(mut self, is_normalized: bool) -> Self {
        self.is_normalized = is_normalized;
        self
    }
}

impl fmt::Debug for YAxisModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YAxisModel")
            .field("extent", &self.extent)
            .field("label", &self.label)
            .field("split_number", &self.split_number)
            .field("is_normalized", &self.is_normalized)
            .finish_non_exhaustive()
    }
}
