//! Chart axis scaling for Nimbus
//!
//! Computes "nice" value-axis parameters for the forecast and history
//! charts so gridlines land on round numbers, extreme points keep
//! headroom, and series that dip below zero get their own sections.

pub mod scale;
pub mod types;

pub use scale::{compute_linear_scale, ScaleOptions};
pub use types::{AxisScale, SeriesPoint};
