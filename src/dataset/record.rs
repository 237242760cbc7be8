use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::{Element, RecordMetadata, RemoteId};
use crate::series::{Series, SeriesError};

/// A record as held by the remote store: identity, metadata, series and the
/// server-assigned modification time.
///
/// Serializes to the remote JSON shape
/// `{id, owner, material, elements, temperature, x, y, updatedAt}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RecordWire", into = "RecordWire")]
pub struct PersistedRecord {
    id: RemoteId,
    metadata: RecordMetadata,
    series: Series,
    updated_at: DateTime<Utc>,
}

impl PersistedRecord {
    /// Assemble a record from its parts
    pub fn new(
        id: RemoteId,
        metadata: RecordMetadata,
        series: Series,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            metadata,
            series,
            updated_at,
        }
    }

    /// Remote primary key
    pub fn id(&self) -> RemoteId {
        self.id
    }

    /// Stored metadata
    pub fn metadata(&self) -> &RecordMetadata {
        &self.metadata
    }

    /// Stored pattern
    pub fn series(&self) -> &Series {
        &self.series
    }

    /// Last modification time assigned by the store
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Split into `(id, metadata, series, updated_at)`
    pub fn into_parts(self) -> (RemoteId, RecordMetadata, Series, DateTime<Utc>) {
        (self.id, self.metadata, self.series, self.updated_at)
    }

    /// Canonical `owner_material_YYYYMMDD_temperatureK` label
    pub fn display_name(&self) -> String {
        super::derive_display_name(&self.metadata, &self.updated_at)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordWire {
    id: RemoteId,
    owner: String,
    material: String,
    elements: Vec<Element>,
    temperature: f64,
    x: Vec<f64>,
    y: Vec<f64>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    updated_at: DateTime<Utc>,
}

impl TryFrom<RecordWire> for PersistedRecord {
    type Error = SeriesError;

    fn try_from(wire: RecordWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: wire.id,
            metadata: RecordMetadata::from_stored(
                wire.owner,
                wire.material,
                wire.elements,
                wire.temperature,
            ),
            series: Series::from_columns(wire.x, wire.y)?,
            updated_at: wire.updated_at,
        })
    }
}

impl From<PersistedRecord> for RecordWire {
    fn from(record: PersistedRecord) -> Self {
        let (x, y) = record.series.into_columns();
        Self {
            id: record.id,
            owner: record.metadata.owner().to_string(),
            material: record.metadata.material().to_string(),
            elements: record.metadata.elements().to_vec(),
            temperature: record.metadata.temperature(),
            x,
            y,
            updated_at: record.updated_at,
        }
    }
}

/// Parse an ISO 8601 timestamp.
///
/// Offsets are honoured; timestamps without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|t| t.and_utc()))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}
