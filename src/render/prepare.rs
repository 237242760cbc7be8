use serde::Serialize;

use super::palette::{color_for, Rgb};
use crate::dataset::{Dataset, DatasetId};

/// One chart point after offsetting
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderPoint {
    /// Diffraction angle 2θ
    pub x: f64,
    /// Intensity multiplied by the series offset
    pub y: f64,
}

/// A dataset prepared for the log-scale chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSeries {
    /// Dataset this series was built from
    #[serde(skip)]
    pub id: DatasetId,
    /// Legend label
    pub label: String,
    /// Line color
    pub color: Rgb,
    /// Vertical multiplier applied to every intensity
    pub offset: f64,
    /// Points in original x order
    pub points: Vec<RenderPoint>,
}

/// Vertical offset for the series at position `index`: `10^index`
pub fn offset_for(index: usize) -> f64 {
    10f64.powi(i32::try_from(index).unwrap_or(i32::MAX))
}

/// Turn an ordered sequence of datasets into chart series.
///
/// The series at position `i` gets `color_for(i)` and offset `10^i`; every
/// intensity is multiplied by that offset. The output depends only on the
/// input order and contents, so calling it again on an unchanged working set
/// yields the same series.
pub fn prepare<'a, I>(datasets: I) -> Vec<RenderSeries>
where
    I: IntoIterator<Item = &'a Dataset>,
{
    datasets
        .into_iter()
        .enumerate()
        .map(|(index, dataset)| {
            let offset = offset_for(index);
            let points = dataset
                .series()
                .pairs()
                .map(|(x, y)| RenderPoint { x, y: y * offset })
                .collect();

            RenderSeries {
                id: *dataset.id(),
                label: format!("XRD - {}", dataset.display_name()),
                color: color_for(index),
                offset,
                points,
            }
        })
        .collect()
}
