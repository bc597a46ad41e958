use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Numeric `[min, max]` span a series occupies on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Creates an extent, rejecting non-finite bounds and `min > max`.
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChartError::InvalidExtent { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` when `value` lies strictly outside `[min, max]`.
    #[must_use]
    pub fn excludes(self, value: f64) -> bool {
        value < self.min || value > self.max
    }

    /// Extends both sides by `amount`.
    #[must_use]
    pub fn padded(self, amount: f64) -> (f64, f64) {
        (self.min - amount, self.max + amount)
    }
}

impl From<Extent> for (f64, f64) {
    fn from(extent: Extent) -> Self {
        (extent.min, extent.max)
    }
}

/// Which side of the plot a metric axis sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Left,
    Right,
}
