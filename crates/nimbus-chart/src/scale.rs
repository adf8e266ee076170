//! Linear value-axis computation.
//!
//! Targets about five sections per chart, pads the data so extreme points
//! are never clipped, and rounds the section height onto the classic
//! 1 / 2.5 / 5 / 10 ladder so gridlines land on round numbers.

use crate::types::{AxisScale, SeriesPoint};

/// Target number of gridline intervals before nice-rounding.
const TARGET_SECTIONS: f64 = 5.0;

/// Per-call-site tuning for [`compute_linear_scale`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleOptions {
    /// Fraction of the data range added as headroom on both ends
    pub padding_fraction: f64,
    /// Minimum absolute headroom, so near-constant series still get room
    pub min_padding: f64,
    /// Plotted chart height, when known; enables the label shift for
    /// series with a negative region
    pub chart_height_px: Option<f64>,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            padding_fraction: 0.15,
            min_padding: 2.0,
            chart_height_px: None,
        }
    }
}

impl ScaleOptions {
    /// The tighter variant used by the compact trend cards.
    pub fn compact() -> Self {
        Self {
            padding_fraction: 0.10,
            min_padding: 1.0,
            chart_height_px: None,
        }
    }

    pub fn with_chart_height(mut self, px: f64) -> Self {
        self.chart_height_px = Some(px);
        self
    }
}

/// Compute axis parameters for one or more series sharing a value axis.
///
/// Empty input yields the neutral [`AxisScale::default`] so a chart with
/// no data renders an unconstrained empty axis instead of erroring.
pub fn compute_linear_scale(series: &[Vec<SeriesPoint>], options: &ScaleOptions) -> AxisScale {
    let values: Vec<f64> = series
        .iter()
        .flatten()
        .map(|p| p.value)
        .filter(|v| v.is_finite())
        .collect();
    let Some((min_val, max_val)) = min_max(&values) else {
        return AxisScale::default();
    };

    let padding = ((max_val - min_val) * options.padding_fraction)
        .ceil()
        .max(options.min_padding);
    let padded_max = max_val + padding;
    let padded_min = min_val - padding;

    // Total span from zero (or below) up to the padded max
    let range = padded_max - padded_min.min(0.0);
    let step_value = nice_step(range / TARGET_SECTIONS);

    let no_of_sections = (padded_max / step_value).ceil().max(0.0) as u32;
    let max_value = f64::from(no_of_sections) * step_value;

    if padded_min >= 0.0 {
        return AxisScale {
            max_value,
            step_value,
            no_of_sections,
            ..AxisScale::default()
        };
    }

    let sections_below = (padded_min.abs() / step_value).ceil() as u32;
    let label_shift = options.chart_height_px.and_then(|height| {
        (no_of_sections > 0)
            .then(|| f64::from(sections_below) * (height / f64::from(no_of_sections)))
    });

    AxisScale {
        max_value,
        step_value,
        no_of_sections,
        most_negative_value: Some(f64::from(sections_below) * step_value),
        no_of_sections_below_x_axis: Some(sections_below),
        label_vertical_shift_px: label_shift,
    }
}

/// Round a raw step onto the 1 / 2.5 / 5 / 10 magnitude ladder, then up
/// to a whole number with a floor of 1 so a zero step can never reach
/// the renderer.
fn nice_step(raw_step: f64) -> f64 {
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    let multiplier = if residual <= 1.5 {
        1.0
    } else if residual <= 3.5 {
        2.5
    } else if residual <= 7.5 {
        5.0
    } else {
        10.0
    };
    (magnitude * multiplier).ceil().max(1.0)
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(values.iter().fold((first, first), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    }))
}
