use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Element, FormError};

/// Descriptive fields stored with a remote record.
///
/// Construct with [`RecordMetadata::new`], which enforces the same rules as
/// the upload form: non-blank owner and material, at least one element, and a
/// finite non-negative temperature in kelvin. Elements keep the order in which
/// they were first given; duplicates are dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordMetadata {
    owner: String,
    material: String,
    elements: Vec<Element>,
    temperature: f64,
}

impl RecordMetadata {
    /// Validate and build metadata
    pub fn new<I>(
        owner: impl Into<String>,
        material: impl Into<String>,
        elements: I,
        temperature: f64,
    ) -> Result<Self, FormError>
    where
        I: IntoIterator<Item = Element>,
    {
        let owner = owner.into().trim().to_string();
        if owner.is_empty() {
            return Err(FormError::MissingOwner);
        }

        let material = material.into().trim().to_string();
        if material.is_empty() {
            return Err(FormError::MissingMaterial);
        }

        let mut unique = Vec::new();
        for element in elements {
            if !unique.contains(&element) {
                unique.push(element);
            }
        }
        if unique.is_empty() {
            return Err(FormError::NoElements);
        }

        if !temperature.is_finite() || temperature < 0.0 {
            return Err(FormError::InvalidTemperature(temperature));
        }

        Ok(Self {
            owner,
            material,
            elements: unique,
            temperature,
        })
    }

    /// Metadata read back from the remote store, which is authoritative for
    /// what it already holds.
    pub(crate) fn from_stored(
        owner: String,
        material: String,
        elements: Vec<Element>,
        temperature: f64,
    ) -> Self {
        Self {
            owner,
            material,
            elements,
            temperature,
        }
    }

    /// Person who measured or uploaded the pattern
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Material label, e.g. `"Si"` or `"LaFeO3"`
    pub fn material(&self) -> &str {
        &self.material
    }

    /// Constituent elements
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Measurement temperature in kelvin
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Elements joined with `-`, e.g. `"Si-O"`
    pub fn element_list(&self) -> String {
        self.elements
            .iter()
            .map(|e| e.symbol())
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// Compact `YYYYMMDD` date stamp (UTC) used in names and export files
pub fn date_stamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y%m%d").to_string()
}

/// Canonical label for a persisted record: `owner_material_YYYYMMDD_temperatureK`.
///
/// This is a display projection only. Owner and material may themselves contain
/// `_`, so the label cannot be split back into fields; edit forms are pre-filled
/// from [`RecordMetadata`] via [`SaveForm::from_metadata`](super::SaveForm::from_metadata).
pub fn derive_display_name(metadata: &RecordMetadata, timestamp: &DateTime<Utc>) -> String {
    format!(
        "{}_{}_{}_{}K",
        metadata.owner,
        metadata.material,
        date_stamp(timestamp),
        metadata.temperature
    )
}
