use crate::core::CartesianChartModel;
use crate::error::ChartResult;

use super::dimension_axis::build_dimension_axis;
use super::metric_axis::build_metric_axes;
use super::{
    AxesOption, ChartMeasurements, ChartSettings, IntervalTicksResolver, RenderingContext,
    TimeSeriesTicksResolver,
};

/// Builds renderer-ready axis options for cartesian charts.
///
/// Holds only the rendering context and the time-series tick resolver, so a
/// single builder can serve every render pass.
#[derive(Debug, Clone, Default)]
pub struct AxisOptionBuilder<T = IntervalTicksResolver> {
    context: RenderingContext,
    resolver: T,
}

impl AxisOptionBuilder {
    #[must_use]
    pub fn new(context: RenderingContext) -> Self {
        Self {
            context,
            resolver: IntervalTicksResolver::default(),
        }
    }

    /// Like [`AxisOptionBuilder::new`], but rejects contexts with invalid
    /// colors or font size.
    pub fn try_new(context: RenderingContext) -> ChartResult<Self> {
        context.validate()?;
        Ok(Self::new(context))
    }
}

impl<T: TimeSeriesTicksResolver> AxisOptionBuilder<T> {
    /// Replaces the time-series tick resolver.
    #[must_use]
    pub fn with_resolver<U: TimeSeriesTicksResolver>(self, resolver: U) -> AxisOptionBuilder<U> {
        AxisOptionBuilder {
            context: self.context,
            resolver,
        }
    }

    #[must_use]
    pub fn context(&self) -> &RenderingContext {
        &self.context
    }

    #[must_use]
    pub fn build(
        &self,
        chart_model: &CartesianChartModel,
        width: f64,
        measurements: &ChartMeasurements,
        settings: &ChartSettings,
        has_timeline_events: bool,
    ) -> AxesOption {
        AxesOption {
            x_axis: build_dimension_axis(
                chart_model,
                width,
                settings,
                measurements,
                has_timeline_events,
                &self.resolver,
                &self.context,
            ),
            y_axis: build_metric_axes(chart_model, measurements, settings, &self.context),
        }
    }
}

/// Builds the dimension axis and metric axes with the default tick resolver.
#[must_use]
pub fn build_axes(
    chart_model: &CartesianChartModel,
    width: f64,
    measurements: &ChartMeasurements,
    settings: &ChartSettings,
    has_timeline_events: bool,
    context: &RenderingContext,
) -> AxesOption {
    AxisOptionBuilder::new(context.clone()).build(
        chart_model,
        width,
        measurements,
        settings,
        has_timeline_events,
    )
}
