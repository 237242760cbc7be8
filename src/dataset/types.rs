use std::path::Path;

use chrono::{DateTime, Utc};

use super::{DatasetId, PersistedRecord, RecordMetadata};
use crate::series::{self, ParseError, Series};

/// One diffraction pattern in the working set.
///
/// Datasets loaded from files start with a [`DatasetId::Local`] identity and no
/// metadata. Datasets fetched from the remote store carry a
/// [`DatasetId::Remote`] identity, full metadata and a modification time; the
/// only way to obtain a remote identity is through a [`PersistedRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    id: DatasetId,
    display_name: String,
    series: Series,
    metadata: Option<RecordMetadata>,
    updated_at: Option<DateTime<Utc>>,
}

impl Dataset {
    /// New unsaved dataset with a fresh local identity
    pub fn new_local(display_name: impl Into<String>, series: Series) -> Self {
        Self {
            id: DatasetId::new_local(),
            display_name: display_name.into(),
            series,
            metadata: None,
            updated_at: None,
        }
    }

    /// Parse a measurement file; the display name is the file name
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let series = series::parse_file(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new_local(name, series))
    }

    /// Current identity
    pub fn id(&self) -> &DatasetId {
        &self.id
    }

    /// True iff the identity is remote
    pub fn is_persisted(&self) -> bool {
        self.id.is_persisted()
    }

    /// Label shown in lists and the chart legend
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Rename the dataset (display only)
    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.display_name = name.into();
    }

    /// Measured pattern
    pub fn series(&self) -> &Series {
        &self.series
    }

    /// Replace the measured pattern, e.g. with a re-measurement of a stored
    /// record. Identity is unaffected; the next save writes the new data.
    pub fn set_series(&mut self, series: Series) {
        self.series = series;
    }

    /// Metadata, once attached by an edit or a fetch
    pub fn metadata(&self) -> Option<&RecordMetadata> {
        self.metadata.as_ref()
    }

    /// Replace the metadata fields (an edit; identity is unaffected)
    pub fn set_metadata(&mut self, metadata: RecordMetadata) {
        self.metadata = Some(metadata);
    }

    /// Server modification time; `None` while unsaved
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Persisted form of this dataset, if it has one
    pub fn to_record(&self) -> Option<PersistedRecord> {
        let id = self.id.remote()?;
        Some(PersistedRecord::new(
            id,
            self.metadata.clone()?,
            self.series.clone(),
            self.updated_at?,
        ))
    }
}

impl From<PersistedRecord> for Dataset {
    fn from(record: PersistedRecord) -> Self {
        let display_name = record.display_name();
        let (id, metadata, series, updated_at) = record.into_parts();
        Self {
            id: DatasetId::Remote(id),
            display_name,
            series,
            metadata: Some(metadata),
            updated_at: Some(updated_at),
        }
    }
}
