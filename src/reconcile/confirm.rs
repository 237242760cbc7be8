use crate::dataset::{RecordMetadata, RemoteId};

/// What the user is asked to approve before an existing record is overwritten
#[derive(Debug, Clone, Copy)]
pub struct OverwriteRequest<'a> {
    /// Record that would be replaced
    pub id: RemoteId,
    /// Current label of the dataset being saved
    pub display_name: &'a str,
    /// Fields that would be written
    pub fields: &'a RecordMetadata,
}

/// Human-in-the-loop approval for overwriting a remote record.
///
/// Any `FnMut(&OverwriteRequest) -> bool` closure works as a `Confirm`.
pub trait Confirm {
    /// Return `true` to proceed with the update
    fn confirm_overwrite(&mut self, request: &OverwriteRequest<'_>) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&OverwriteRequest<'_>) -> bool,
{
    fn confirm_overwrite(&mut self, request: &OverwriteRequest<'_>) -> bool {
        self(request)
    }
}

/// Approves every overwrite (non-interactive `--yes` mode)
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm_overwrite(&mut self, _request: &OverwriteRequest<'_>) -> bool {
        true
    }
}

/// Declines every overwrite
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn confirm_overwrite(&mut self, _request: &OverwriteRequest<'_>) -> bool {
        false
    }
}
