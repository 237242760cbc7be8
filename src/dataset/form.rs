use super::{Element, FormError, RecordMetadata};

/// Raw field values as entered in an upload/edit form.
///
/// Nothing here is trusted until [`SaveForm::validate`] turns it into
/// [`RecordMetadata`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaveForm {
    /// Owner name
    pub owner: String,
    /// Material name
    pub material: String,
    /// Element symbols, e.g. `["Si", "O"]`
    pub elements: Vec<String>,
    /// Temperature in kelvin
    pub temperature: f64,
}

impl SaveForm {
    /// Pre-fill an edit form from stored metadata
    pub fn from_metadata(metadata: &RecordMetadata) -> Self {
        Self {
            owner: metadata.owner().to_string(),
            material: metadata.material().to_string(),
            elements: metadata
                .elements()
                .iter()
                .map(|e| e.symbol().to_string())
                .collect(),
            temperature: metadata.temperature(),
        }
    }

    /// Check all fields and produce validated metadata
    pub fn validate(&self) -> Result<RecordMetadata, FormError> {
        let elements = self
            .elements
            .iter()
            .map(|s| s.parse::<Element>())
            .collect::<Result<Vec<_>, _>>()?;

        RecordMetadata::new(
            self.owner.as_str(),
            self.material.as_str(),
            elements,
            self.temperature,
        )
    }
}
