use anyhow::{Context, Result};

use xrdview::dataset::RemoteId;
use xrdview::reconcile::Reconciler;
use xrdview::remote::RecordStore;

/// Delete a remote record
pub fn run<S: RecordStore>(reconciler: &Reconciler<S>, id: i64) -> Result<()> {
    reconciler
        .delete(RemoteId(id))
        .with_context(|| format!("Failed to delete record {}", id))?;
    println!("Deleted record {}", id);
    Ok(())
}
