use super::{AxisNameOption, NameLocation, RenderingContext, TextStyleOption};

/// Distance between the axis line and its name: tick labels plus a margin.
#[must_use]
pub fn axis_name_gap(ticks_width: f64, context: &RenderingContext) -> f64 {
    ticks_width + context.style.axis_name_margin
}

#[must_use]
pub fn axis_name_default_option(
    context: &RenderingContext,
    name_gap: f64,
    name: Option<String>,
    rotate: Option<f64>,
) -> AxisNameOption {
    AxisNameOption {
        name,
        name_gap,
        name_location: NameLocation::Middle,
        name_rotate: rotate,
        name_text_style: TextStyleOption {
            color: context.palette.text_dark,
            font_size: context.theme.label_font_size,
            font_weight: context.style.axis_name_weight,
            font_family: context.font_family.clone(),
        },
    }
}
