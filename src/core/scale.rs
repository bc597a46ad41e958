use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub type AxisValueMapFn = Arc<dyn Fn(f64) -> f64 + Send + Sync + 'static>;

/// Y-axis scale selected in chart settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum YAxisScale {
    #[default]
    Linear,
    Pow,
    Log,
}

/// Mutually inverse mapping between renderer-internal axis coordinates and
/// semantic values.
#[derive(Clone)]
pub struct NumericAxisScaleTransforms {
    to_axis: AxisValueMapFn,
    from_axis: AxisValueMapFn,
}

impl NumericAxisScaleTransforms {
    /// Builds a transform pair from caller-supplied functions.
    ///
    /// Callers are responsible for the two functions being inverses.
    #[must_use]
    pub fn new(to_axis: AxisValueMapFn, from_axis: AxisValueMapFn) -> Self {
        Self { to_axis, from_axis }
    }

    #[must_use]
    pub fn linear() -> Self {
        Self::new(Arc::new(|value| value), Arc::new(|value| value))
    }

    /// Sign-preserving square-root scale.
    #[must_use]
    pub fn pow() -> Self {
        Self::new(
            Arc::new(|value: f64| value.signum() * value.abs().sqrt()),
            Arc::new(|value: f64| value.signum() * value * value),
        )
    }

    /// Sign-preserving base-10 logarithmic scale.
    ///
    /// Zero maps to zero in both directions.
    #[must_use]
    pub fn log() -> Self {
        Self::new(
            Arc::new(|value: f64| {
                if value == 0.0 {
                    0.0
                } else {
                    value.signum() * value.abs().log10()
                }
            }),
            Arc::new(|value: f64| {
                if value == 0.0 {
                    0.0
                } else {
                    value.signum() * 10f64.powf(value.abs())
                }
            }),
        )
    }

    #[must_use]
    pub fn for_scale(scale: YAxisScale) -> Self {
        match scale {
            YAxisScale::Linear => Self::linear(),
            YAxisScale::Pow => Self::pow(),
            YAxisScale::Log => Self::log(),
        }
    }

    #[must_use]
    pub fn to_axis_value(&self, value: f64) -> f64 {
        (self.to_axis)(value)
    }

    #[must_use]
    pub fn from_axis_value(&self, raw_value: f64) -> f64 {
        (self.from_axis)(raw_value)
    }
}

impl Default for NumericAxisScaleTransforms {
    fn default() -> Self {
        Self::linear()
    }
}

impl fmt::Debug for NumericAxisScaleTransforms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericAxisScaleTransforms")
            .finish_non_exhaustive()
    }
}
