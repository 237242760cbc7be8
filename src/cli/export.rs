use anyhow::{Context, Result};
use std::path::PathBuf;

use xrdview::dataset::RemoteId;
use xrdview::export::{self, ExportFormat};
use xrdview::reconcile::Reconciler;
use xrdview::remote::RecordStore;

/// Fetch a record and write it under `dir`
pub fn run<S: RecordStore>(
    reconciler: &Reconciler<S>,
    id: i64,
    dir: PathBuf,
    format: ExportFormat,
) -> Result<()> {
    let id = RemoteId(id);
    let record = reconciler
        .fetch_all()
        .context("Failed to fetch records")?
        .into_iter()
        .find(|record| record.id() == id)
        .with_context(|| format!("Record {} not found", id))?;

    let path = export::write_to_dir(&record, &dir, format)
        .with_context(|| format!("Failed to export record {} to {}", id, dir.display()))?;
    println!("{}", path.display());

    Ok(())
}
