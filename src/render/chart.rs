use serde::Serialize;

use super::palette::BACKGROUND_ALPHA;
use super::prepare::{prepare, RenderPoint, RenderSeries};
use crate::dataset::Dataset;

/// Lower bound of the 2θ axis
pub const DEFAULT_X_MIN: f64 = 0.0;
/// Upper bound of the 2θ axis
pub const DEFAULT_X_MAX: f64 = 120.0;

/// Axis scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    /// Linear axis
    Linear,
    /// Base-10 logarithmic axis
    Logarithmic,
}

/// One chart axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    /// Scale type
    #[serde(rename = "type")]
    pub scale: AxisScale,
    /// Axis title
    pub title: String,
    /// Lower bound, if fixed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper bound, if fixed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Whether tick labels are drawn
    pub ticks: bool,
}

/// Chart-level options
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    /// Chart title
    pub title: String,
    /// Horizontal 2θ axis
    pub x: Axis,
    /// Vertical intensity axis
    pub y: Axis,
}

impl ChartOptions {
    /// Options for an XRD plot over the given 2θ range
    pub fn xrd(x_min: f64, x_max: f64) -> Self {
        Self {
            title: "X-ray diffraction (XRD) data".to_string(),
            x: Axis {
                scale: AxisScale::Linear,
                title: "2θ (deg)".to_string(),
                min: Some(x_min),
                max: Some(x_max),
                ticks: true,
            },
            // Offsets make absolute intensities meaningless, so no tick labels
            y: Axis {
                scale: AxisScale::Logarithmic,
                title: "Intensity".to_string(),
                min: None,
                max: None,
                ticks: false,
            },
        }
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self::xrd(DEFAULT_X_MIN, DEFAULT_X_MAX)
    }
}

/// A curve as the chart surface consumes it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    /// Legend label
    pub label: String,
    /// Line color, `rgb(..)`
    pub border_color: String,
    /// Fill color, `rgba(.., 0.2)`
    pub background_color: String,
    /// Offset points
    pub data: Vec<RenderPoint>,
}

impl From<RenderSeries> for ChartDataset {
    fn from(series: RenderSeries) -> Self {
        Self {
            label: series.label,
            border_color: series.color.to_string(),
            background_color: series.color.with_alpha(BACKGROUND_ALPHA),
            data: series.points,
        }
    }
}

/// Everything the chart surface needs to draw the working set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Axis and title options
    pub options: ChartOptions,
    /// One entry per dataset, in working-set order
    pub datasets: Vec<ChartDataset>,
}

impl ChartSpec {
    /// Prepare `datasets` and attach `options`
    pub fn build<'a, I>(datasets: I, options: ChartOptions) -> Self
    where
        I: IntoIterator<Item = &'a Dataset>,
    {
        Self {
            options,
            datasets: prepare(datasets).into_iter().map(ChartDataset::from).collect(),
        }
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
