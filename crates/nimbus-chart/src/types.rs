use serde::{Deserialize, Serialize};

/// A single named sample in a chart series.
///
/// The core computes axis parameters from these — the renderer just
/// plots them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Sample value (temperature, precipitation, humidity, wind speed)
    pub value: f64,
    /// X-axis label; empty for unlabeled intermediate samples
    #[serde(default)]
    pub label: String,
}

impl SeriesPoint {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    /// An unlabeled sample.
    pub fn bare(value: f64) -> Self {
        Self {
            value,
            label: String::new(),
        }
    }
}

/// Value-axis parameters consumed by the chart renderer.
///
/// Invariant: `max_value == no_of_sections as f64 * step_value` exactly,
/// and when the negative fields are present,
/// `most_negative_value == no_of_sections_below_x_axis as f64 * step_value`
/// exactly. The renderer depends on this to keep gridlines aligned and
/// points unclipped. Recomputed on every render, never persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisScale {
    /// Top of the value axis
    pub max_value: f64,
    /// Height of one gridline interval
    pub step_value: f64,
    /// Number of gridline intervals above the x axis
    pub no_of_sections: u32,
    /// Magnitude of the axis bottom, present only when the data dips below zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_negative_value: Option<f64>,
    /// Gridline intervals below the x axis, present with `most_negative_value`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_of_sections_below_x_axis: Option<u32>,
    /// Downward shift for axis labels so they clear the negative region,
    /// present only when the caller supplied the chart pixel height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_vertical_shift_px: Option<f64>,
}

impl AxisScale {
    /// True when the scale carries negative-axis sections.
    pub fn has_negative_region(&self) -> bool {
        self.most_negative_value.is_some()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_bare_point_has_empty_label() {
        let p = SeriesPoint::bare(21.5);
        assert_eq!(p.value, 21.5);
        assert!(p.label.is_empty());
    }

    #[test]
    fn test_default_scale_is_neutral() {
        let scale = AxisScale::default();
        assert_eq!(scale.max_value, 0.0);
        assert_eq!(scale.no_of_sections, 0);
        assert!(!scale.has_negative_region());
    }

    #[test]
    fn test_negative_fields_omitted_from_json() {
        let scale = AxisScale {
            max_value: 60.0,
            step_value: 10.0,
            no_of_sections: 6,
            ..AxisScale::default()
        };
        let json = serde_json::to_string(&scale).unwrap();
        assert!(!json.contains("most_negative_value"));
        assert!(!json.contains("label_vertical_shift_px"));
    }
}
