use log::{debug, info};

use super::{Confirm, DeleteError, FetchError, OverwriteRequest, SaveError};
use crate::dataset::{
    Dataset, DatasetId, PersistedRecord, RecordMetadata, RemoteId, WorkingSet, WorkingSetError,
};
use crate::remote::{BoundaryError, RecordPayload, RecordStore};

/// Which write a save resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    /// A new record was created
    Created,
    /// An existing record was overwritten
    Updated,
}

/// Result of a successful save
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    /// Record as returned by the store
    pub record: PersistedRecord,
    /// Branch that was taken
    pub action: SaveAction,
}

/// Decides between create and update for each save and owns every write to
/// the remote store.
#[derive(Debug, Clone)]
pub struct Reconciler<S> {
    store: S,
}

impl<S: RecordStore> Reconciler<S> {
    /// Wrap a record store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Save `dataset` with the given fields.
    ///
    /// - Local identity: create, without probing the store.
    /// - Remote identity: check existence. A failed existence check aborts the save. If
    ///   the record is gone, create a new one; if it exists, ask `confirm` and
    ///   update it in place, or return [`SaveError::UserCancelled`] with no write.
    ///
    /// The existence check and the write are separate requests. A record deleted between
    /// them makes the update fail with [`SaveError::RemoteRejected`].
    pub fn save(
        &self,
        dataset: &Dataset,
        fields: &RecordMetadata,
        confirm: &mut dyn Confirm,
    ) -> Result<SaveOutcome, SaveError> {
        let payload = RecordPayload::new(fields, dataset.series());

        match dataset.id() {
            DatasetId::Local(local) => {
                debug!("{} has a local identity, creating", local);
                self.create(&payload)
            }
            DatasetId::Remote(id) => {
                let exists = self
                    .store
                    .exists(*id)
                    .map_err(SaveError::ExistenceCheckFailed)?;

                if !exists {
                    info!("Record {} no longer exists remotely, creating a new one", id);
                    return self.create(&payload);
                }

                let request = OverwriteRequest {
                    id: *id,
                    display_name: dataset.display_name(),
                    fields,
                };
                if !confirm.confirm_overwrite(&request) {
                    debug!("Overwrite of record {} declined", id);
                    return Err(SaveError::UserCancelled);
                }

                self.update(*id, &payload)
            }
        }
    }

    /// Save the working-set entry `id` and replace it with the persisted form.
    ///
    /// The entry is flagged as submitting for the duration of the call, so a
    /// second save or delete for it is refused until this one returns. Returns
    /// the entry's identity after the save.
    pub fn save_in(
        &self,
        set: &mut WorkingSet,
        id: &DatasetId,
        fields: &RecordMetadata,
        confirm: &mut dyn Confirm,
    ) -> Result<DatasetId, SaveError> {
        set.begin_submit(id)?;

        let result = match set.get(id) {
            Some(dataset) => self.save(dataset, fields, confirm),
            None => Err(WorkingSetError::UnknownDataset(*id).into()),
        };
        set.finish_submit(id);

        let outcome = result?;
        let saved = Dataset::from(outcome.record);
        let current = *saved.id();
        if let (DatasetId::Local(_), DatasetId::Remote(remote)) = (id, &current) {
            info!("Dataset {} is now remote record {}", id, remote);
        }
        set.replace(id, saved);
        Ok(current)
    }

    /// Delete a remote record
    pub fn delete(&self, id: RemoteId) -> Result<(), DeleteError> {
        self.store.delete(id).map_err(DeleteError::Rejected)?;
        info!("Deleted record {}", id);
        Ok(())
    }

    /// Delete the working-set entry's remote record and drop the entry.
    ///
    /// Local datasets have nothing to delete remotely: the call returns
    /// `Ok(false)` and leaves the working set alone. Returns `Ok(true)` after a
    /// remote deletion.
    pub fn delete_in(&self, set: &mut WorkingSet, id: &DatasetId) -> Result<bool, DeleteError> {
        let remote = match id {
            DatasetId::Local(_) => return Ok(false),
            DatasetId::Remote(remote) => *remote,
        };

        set.begin_submit(id)?;
        let result = self.delete(remote);
        set.finish_submit(id);

        result?;
        set.remove(id);
        Ok(true)
    }

    /// Fetch every remote record
    pub fn fetch_all(&self) -> Result<Vec<PersistedRecord>, FetchError> {
        let records = self.store.list()?;
        debug!("Fetched {} records", records.len());
        Ok(records)
    }

    fn create(&self, payload: &RecordPayload<'_>) -> Result<SaveOutcome, SaveError> {
        let record = self
            .store
            .create(payload)
            .map_err(SaveError::RemoteRejected)?;
        info!("Created record {}", record.id());
        Ok(SaveOutcome {
            record,
            action: SaveAction::Created,
        })
    }

    fn update(&self, id: RemoteId, payload: &RecordPayload<'_>) -> Result<SaveOutcome, SaveError> {
        let record = self
            .store
            .update(id, payload)
            .map_err(SaveError::RemoteRejected)?;
        if record.id() != id {
            return Err(SaveError::RemoteRejected(BoundaryError::UnexpectedResponse(
                format!("update of record {} returned record {}", id, record.id()),
            )));
        }
        info!("Updated record {}", id);
        Ok(SaveOutcome {
            record,
            action: SaveAction::Updated,
        })
    }
}
