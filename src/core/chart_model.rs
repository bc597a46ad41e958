use crate::core::axis_model::{ColumnDescriptor, XAxisModel, YAxisModel};
use crate::core::scale::{NumericAxisScaleTransforms, YAxisScale};

/// Computed cartesian chart model consumed by the axis builders.
///
/// Produced upstream by the data-transformation stage; never mutated here.
#[derive(Debug, Clone)]
pub struct CartesianChartModel {
    pub x_axis_model: XAxisModel,
    pub dimension_column: ColumnDescriptor,
    pub left_axis_model: Option<YAxisModel>,
    pub right_axis_model: Option<YAxisModel>,
    /// Explicit y transforms; when unset the `graph.y_axis.scale` setting decides.
    pub y_axis_scale_transforms: Option<NumericAxisScaleTransforms>,
    /// Row count of the transformed dataset (one histogram bin per row).
    pub dataset_len: usize,
}

impl CartesianChartModel {
    #[must_use]
    pub fn new(x_axis_model: XAxisModel, dimension_column: ColumnDescriptor) -> Self {
        Self {
            x_axis_model,
            dimension_column,
            left_axis_model: None,
            right_axis_model: None,
            y_axis_scale_transforms: None,
            dataset_len: 0,
        }
    }

    #[must_use]
    pub fn with_left_axis(mut self, axis_model: YAxisModel) -> Self {
        self.left_axis_model = Some(axis_model);
        self
    }

    #[must_use]
    pub fn with_right_axis(mut self, axis_model: YAxisModel) -> Self {
        self.right_axis_model = Some(axis_model);
        self
    }

    #[must_use]
    pub fn with_y_axis_scale_transforms(mut self, transforms: NumericAxisScaleTransforms) -> Self {
        self.y_axis_scale_transforms = Some(transforms);
        self
    }

    #[must_use]
    pub fn with_y_axis_scale(self, scale: YAxisScale) -> Self {
        self.with_y_axis_scale_transforms(NumericAxisScaleTransforms::for_scale(scale))
    }

    /// Transforms used for the metric axes under `scale`.
    #[must_use]
    pub fn resolve_y_axis_scale_transforms(&self, scale: YAxisScale) -> NumericAxisScaleTransforms {
        self.y_axis_scale_transforms
            .clone()
            .unwrap_or_else(|| NumericAxisScaleTransforms::for_scale(scale))
    }

    #[must_use]
    pub fn with_dataset_len(mut self, dataset_len: usize) -> Self {
        self.dataset_len = dataset_len;
        self
    }
}
