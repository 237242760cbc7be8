use serde::Serialize;

use crate::dataset::{Element, RecordMetadata};
use crate::series::Series;

/// Outgoing create/update body: validated metadata merged with a series.
///
/// Carries no identity; the target of an update is addressed by URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordPayload<'a> {
    /// Owner name
    pub owner: &'a str,
    /// Material name
    pub material: &'a str,
    /// Element symbols
    pub elements: &'a [Element],
    /// Temperature in kelvin
    pub temperature: f64,
    /// 2θ values
    pub x: &'a [f64],
    /// Intensities
    pub y: &'a [f64],
}

impl<'a> RecordPayload<'a> {
    /// Merge form fields with the dataset's series
    pub fn new(metadata: &'a RecordMetadata, series: &'a Series) -> Self {
        Self {
            owner: metadata.owner(),
            material: metadata.material(),
            elements: metadata.elements(),
            temperature: metadata.temperature(),
            x: series.x(),
            y: series.y(),
        }
    }
}
