//! # Remote Record Store
//!
//! The persistence boundary. Everything the reconciliation layer needs from the
//! server is expressed by the [`RecordStore`] trait; [`HttpRecordStore`] is the
//! REST implementation.
//!
//! ## Contract
//!
//! ```text
//! GET    /records              -> [record]
//! GET    /records/{id}/exists  -> bool
//! POST   /records              payload -> record (new id, updatedAt)
//! PUT    /records/{id}         payload -> record (same id, new updatedAt)
//! DELETE /records/{id}
//! ```
//!
//! Any non-2xx response becomes [`BoundaryError::Status`]; the body is kept as
//! JSON when the response says it is JSON, otherwise only the status text is kept.

mod error;
mod http;
mod payload;

#[cfg(test)]
mod tests;

pub use error::{BoundaryError, ErrorBody};
pub use http::{HttpRecordStore, DEFAULT_TIMEOUT};
pub use payload::RecordPayload;

use crate::dataset::{PersistedRecord, RemoteId};

/// Operations offered by the remote store.
///
/// Each call is one independent request; there is no transaction spanning
/// several calls.
pub trait RecordStore {
    /// Fetch every stored record
    fn list(&self) -> Result<Vec<PersistedRecord>, BoundaryError>;

    /// Whether a record with this key exists
    fn exists(&self, id: RemoteId) -> Result<bool, BoundaryError>;

    /// Store a new record; the store assigns its key and timestamp
    fn create(&self, payload: &RecordPayload<'_>) -> Result<PersistedRecord, BoundaryError>;

    /// Overwrite all mutable fields of an existing record
    fn update(
        &self,
        id: RemoteId,
        payload: &RecordPayload<'_>,
    ) -> Result<PersistedRecord, BoundaryError>;

    /// Remove a record
    fn delete(&self, id: RemoteId) -> Result<(), BoundaryError>;
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn list(&self) -> Result<Vec<PersistedRecord>, BoundaryError> {
        (**self).list()
    }

    fn exists(&self, id: RemoteId) -> Result<bool, BoundaryError> {
        (**self).exists(id)
    }

    fn create(&self, payload: &RecordPayload<'_>) -> Result<PersistedRecord, BoundaryError> {
        (**self).create(payload)
    }

    fn update(
        &self,
        id: RemoteId,
        payload: &RecordPayload<'_>,
    ) -> Result<PersistedRecord, BoundaryError> {
        (**self).update(id, payload)
    }

    fn delete(&self, id: RemoteId) -> Result<(), BoundaryError> {
        (**self).delete(id)
    }
}
