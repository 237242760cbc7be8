use crate::dataset::WorkingSetError;
use crate::remote::BoundaryError;

/// Errors from [`Reconciler::save`](super::Reconciler::save)
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The existence check for a remote identity failed; nothing was written
    #[error("Could not check whether the record exists: {0}")]
    ExistenceCheckFailed(#[source] BoundaryError),

    /// The store refused the create or update
    #[error("Remote store rejected the save: {0}")]
    RemoteRejected(#[source] BoundaryError),

    /// Overwrite confirmation was declined; nothing was written
    #[error("Save cancelled")]
    UserCancelled,

    /// The working set refused the request
    #[error(transparent)]
    WorkingSet(#[from] WorkingSetError),
}

impl SaveError {
    /// True for the declined-confirmation case, which callers treat as a
    /// silent no-op rather than a failure
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SaveError::UserCancelled)
    }
}

/// Errors from remote deletion
#[derive(Debug, thiserror::Error)]
pub enum DeleteError {
    /// The store refused the deletion
    #[error("Remote store rejected the deletion: {0}")]
    Rejected(#[source] BoundaryError),

    /// The working set refused the request
    #[error(transparent)]
    WorkingSet(#[from] WorkingSetError),
}

/// Errors from listing remote records
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The list request failed
    #[error("Could not fetch records: {0}")]
    Boundary(#[from] BoundaryError),
}
