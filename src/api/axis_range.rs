use tracing::trace;

use crate::core::{Extent, NumericAxisScaleTransforms, YAxisModel};

use super::{AxisRange, ChartSettings};

/// Custom y bounds from settings, mapped into axis-internal units.
#[must_use]
pub fn scaled_min_and_max(
    settings: &ChartSettings,
    transforms: &NumericAxisScaleTransforms,
) -> AxisRange {
    AxisRange {
        min: settings.y_axis_min.map(|min| transforms.to_axis_value(min)),
        max: settings.y_axis_max.map(|max| transforms.to_axis_value(max)),
    }
}

/// Applies user bounds to an axis.
///
/// Normalized axes take the bounds as percentages. Other axes only accept
/// bounds that widen the data extent; anything narrower is dropped so the
/// renderer computes a rounded bound itself.
#[must_use]
pub fn custom_axis_range(
    extent: Extent,
    custom_min: Option<f64>,
    custom_max: Option<f64>,
    is_normalized: bool,
) -> AxisRange {
    if is_normalized {
        return AxisRange {
            min: custom_min.map(|min| min / 100.0),
            max: custom_max.map(|max| max / 100.0),
        };
    }

    let min = custom_min.filter(|min| *min < extent.min);
    let max = custom_max.filter(|max| *max > extent.max);
    if min.is_none() && custom_min.is_some() {
        trace!(?custom_min, extent_min = extent.min, "dropping custom min inside extent");
    }
    if max.is_none() && custom_max.is_some() {
        trace!(?custom_max, extent_max = extent.max, "dropping custom max inside extent");
    }

    AxisRange { min, max }
}

#[must_use]
pub fn y_axis_range(
    axis_model: &YAxisModel,
    transforms: &NumericAxisScaleTransforms,
    settings: &ChartSettings,
) -> AxisRange {
    if settings.y_axis_auto_range {
        return if axis_model.is_normalized {
            AxisRange::NORMALIZED
        } else {
            AxisRange::UNCONSTRAINED
        };
    }

    let custom = scaled_min_and_max(settings, transforms);
    custom_axis_range(
        axis_model.extent,
        custom.min,
        custom.max,
        axis_model.is_normalized,
    )
}
