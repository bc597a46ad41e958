use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use tracing::debug;

use crate::core::{TimeSeriesXAxisModel, TimeUnit, TimestampFormatterFn};

use super::axis_ticks::{
    AXIS_TIME_MAX_TICKS, AXIS_TIME_MIN_TICKS, AXIS_TIME_TARGET_SPACING_PX, axis_tick_target_count,
};

pub type CanRenderFn = Arc<dyn Fn(DateTime<Utc>) -> bool + Send + Sync + 'static>;

/// Tick configuration for a time-series dimension at a given pixel width.
#[derive(Clone)]
pub struct TimeSeriesTicksOptions {
    pub formatter: TimestampFormatterFn,
    /// Smallest allowed gap between ticks, in milliseconds.
    pub min_interval: f64,
    pub max_interval: Option<f64>,
    /// Rejects tick values that would render a misleading partial label.
    pub can_render: CanRenderFn,
    pub x_domain_padded: (f64, f64),
    pub granularity: TimeUnit,
}

impl fmt::Debug for TimeSeriesTicksOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeSeriesTicksOptions")
            .field("min_interval", &self.min_interval)
            .field("max_interval", &self.max_interval)
            .field("x_domain_padded", &self.x_domain_padded)
            .field("granularity", &self.granularity)
            .finish_non_exhaustive()
    }
}

/// Resolves time-series tick options for the dimension axis builder.
pub trait TimeSeriesTicksResolver {
    fn resolve(&self, axis_model: &TimeSeriesXAxisModel, width: f64) -> TimeSeriesTicksOptions;
}

/// Picks the finest calendar granularity that keeps ticks at least
/// `target_spacing_px` apart and no finer than the model interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalTicksResolver {
    pub target_spacing_px: f64,
}

impl Default for IntervalTicksResolver {
    fn default() -> Self {
        Self {
            target_spacing_px: AXIS_TIME_TARGET_SPACING_PX,
        }
    }
}

impl IntervalTicksResolver {
    #[must_use]
    pub fn granularity(&self, axis_model: &TimeSeriesXAxisModel, width: f64) -> (TimeUnit, f64) {
        let tick_count = axis_tick_target_count(
            width,
            self.target_spacing_px,
            AXIS_TIME_MIN_TICKS,
            AXIS_TIME_MAX_TICKS,
        );
        let span_per_tick = axis_model.extent.span() / (tick_count - 1) as f64;
        let floor = span_per_tick.max(axis_model.interval.approx_millis());

        match TimeUnit::ALL
            .into_iter()
            .find(|unit| unit.approx_millis() >= floor)
        {
            Some(unit) => (unit, unit.approx_millis()),
            None => {
                let year = TimeUnit::Year.approx_millis();
                (TimeUnit::Year, (floor / year).ceil() * year)
            }
        }
    }
}

impl TimeSeriesTicksResolver for IntervalTicksResolver {
    fn resolve(&self, axis_model: &TimeSeriesXAxisModel, width: f64) -> TimeSeriesTicksOptions {
        let (granularity, min_interval) = self.granularity(axis_model, width);
        let x_domain_padded = if axis_model.is_padded {
            axis_model
                .extent
                .padded(axis_model.interval.approx_millis() / 2.0)
        } else {
            axis_model.extent.into()
        };
        debug!(
            ?granularity,
            min_interval,
            width,
            "resolved time-series tick granularity"
        );

        TimeSeriesTicksOptions {
            formatter: Arc::clone(&axis_model.formatter),
            min_interval,
            max_interval: axis_model.ticks_max_interval,
            can_render: Arc::new(move |value| is_aligned_to(value, granularity)),
            x_domain_padded,
            granularity,
        }
    }
}

/// Returns `true` when `value` falls on a `unit` boundary.
#[must_use]
pub fn is_aligned_to(value: DateTime<Utc>, unit: TimeUnit) -> bool {
    let at_second = value.nanosecond() == 0;
    let at_minute = at_second && value.second() == 0;
    let at_hour = at_minute && value.minute() == 0;
    let at_day = at_hour && value.hour() == 0;
    let at_month = at_day && value.day() == 1;

    match unit {
        TimeUnit::Second => at_second,
        TimeUnit::Minute => at_minute,
        TimeUnit::Hour => at_hour,
        TimeUnit::Day => at_day,
        TimeUnit::Week => at_day && value.weekday() == Weekday::Mon,
        TimeUnit::Month => at_month,
        TimeUnit::Quarter => at_month && value.month0() % 3 == 0,
        TimeUnit::Year => at_month && value.month() == 1,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use super::{IntervalTicksResolver, TimeSeriesTicksResolver, is_aligned_to};
    use crate::core::{Extent, TimeSeriesInterval, TimeSeriesXAxisModel, TimeUnit};

    const DAY_MS: f64 = 86_400_000.0;

    fn daily_model(days: f64) -> TimeSeriesXAxisModel {
        TimeSeriesXAxisModel::new(
            Extent::new(0.0, days * DAY_MS).expect("extent"),
            TimeSeriesInterval::new(TimeUnit::Day, 1),
            Arc::new(|iso: &str| iso.to_owned()),
        )
    }

    #[test]
    fn wide_axis_keeps_model_granularity() {
        let resolver = IntervalTicksResolver::default();
        let (unit, min_interval) = resolver.granularity(&daily_model(7.0), 1_000.0);
        assert_eq!(unit, TimeUnit::Day);
        assert_eq!(min_interval, DAY_MS);
    }

    #[test]
    fn narrow_axis_coarsens_granularity() {
        let resolver = IntervalTicksResolver::default();
        let (unit, _) = resolver.granularity(&daily_model(365.0), 400.0);
        assert_eq!(unit, TimeUnit::Quarter);
    }

    #[test]
    fn multi_decade_span_rounds_to_whole_years() {
        let resolver = IntervalTicksResolver::default();
        let (unit, min_interval) = resolver.granularity(&daily_model(365.0 * 40.0), 144.0);
        assert_eq!(unit, TimeUnit::Year);
        assert_eq!(min_interval, 20.0 * TimeUnit::Year.approx_millis());
    }

    #[test]
    fn padded_model_extends_domain_by_half_interval() {
        let resolver = IntervalTicksResolver::default();
        let options = resolver.resolve(&daily_model(10.0).with_padding(true), 800.0);
        assert_eq!(options.x_domain_padded, (-DAY_MS / 2.0, 10.5 * DAY_MS));
    }

    #[test]
    fn month_alignment_requires_first_day_at_midnight() {
        let first = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).single().expect("time");
        let second = Utc.with_ymd_and_hms(2024, 4, 2, 0, 0, 0).single().expect("time");
        assert!(is_aligned_to(first, TimeUnit::Month));
        assert!(is_aligned_to(first, TimeUnit::Quarter));
        assert!(!is_aligned_to(first, TimeUnit::Year));
        assert!(!is_aligned_to(second, TimeUnit::Month));
        assert!(is_aligned_to(second, TimeUnit::Day));
    }
}
