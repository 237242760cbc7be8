//! # Render Preparation
//!
//! Converts the working set into chart-ready series for a shared
//! log-intensity axis. Overlapping patterns are separated vertically by
//! multiplying the series at position `i` by `10^i`, and colored from a fixed
//! palette by the same position.
//!
//! [`prepare`] is a pure function of the ordered input; [`ChartSpec`] adds the
//! axis configuration and serializes to JSON.

mod chart;
mod palette;
mod prepare;


pub use chart::{
    Axis, AxisScale, ChartDataset, ChartOptions, ChartSpec, DEFAULT_X_MAX, DEFAULT_X_MIN,
};
pub use palette::{color_for, Rgb, BACKGROUND_ALPHA, PALETTE};
pub use prepare::{offset_for, prepare, RenderPoint, RenderSeries};
