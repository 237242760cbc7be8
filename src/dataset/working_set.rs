use std::fmt;
use std::path::{Path, PathBuf};

use log::{info, warn};

use super::{Dataset, DatasetId, RecordMetadata, WorkingSetError};
use crate::series::{ParseError, Series};

/// Change notification emitted by a [`WorkingSet`]
#[derive(Debug, Clone, PartialEq)]
pub enum WorkingSetEvent {
    /// A dataset was appended
    Added(DatasetId),
    /// A dataset was removed
    Removed(DatasetId),
    /// An entry was replaced in place (e.g. after a save changed its identity)
    Replaced {
        /// Identity before the replacement
        previous: DatasetId,
        /// Identity after the replacement
        current: DatasetId,
    },
    /// A dataset's name, series or metadata was edited; identity is unchanged
    Edited(DatasetId),
    /// All datasets were removed
    Cleared,
}

type Listener = Box<dyn FnMut(&WorkingSetEvent)>;

struct Entry {
    dataset: Dataset,
    submitting: bool,
}

/// Ordered, owned collection of the datasets currently on screen.
///
/// Order is insertion order and is stable when other entries are added or
/// removed; render colors and offsets are derived from it. Each entry carries
/// an explicit `submitting` flag so that a second save or delete for the same
/// dataset is refused while one is outstanding.
#[derive(Default)]
pub struct WorkingSet {
    entries: Vec<Entry>,
    listeners: Vec<Listener>,
    revision: u64,
}

/// Outcome of loading several measurement files
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Identities of the datasets appended, in completion order
    pub loaded: Vec<DatasetId>,
    /// Files that could not be used, with the reason
    pub failed: Vec<(PathBuf, ParseError)>,
}

impl LoadReport {
    /// True when every file was loaded
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl WorkingSet {
    /// Empty working set
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a change listener
    pub fn subscribe(&mut self, listener: impl FnMut(&WorkingSetEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Incremented on every mutation; views can compare it to detect staleness
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of datasets
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no datasets
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Datasets in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Dataset> {
        self.entries.iter().map(|e| &e.dataset)
    }

    /// Look up a dataset by identity
    pub fn get(&self, id: &DatasetId) -> Option<&Dataset> {
        self.position(id).map(|i| &self.entries[i].dataset)
    }

    /// Rename a dataset
    pub fn rename(
        &mut self,
        id: &DatasetId,
        name: impl Into<String>,
    ) -> Result<(), WorkingSetError> {
        self.edit(id, |dataset| dataset.set_display_name(name))
    }

    /// Replace a dataset's series, keeping its identity
    pub fn set_series(&mut self, id: &DatasetId, series: Series) -> Result<(), WorkingSetError> {
        self.edit(id, |dataset| dataset.set_series(series))
    }

    /// Replace a dataset's structured fields, keeping its identity
    pub fn set_metadata(
        &mut self,
        id: &DatasetId,
        metadata: RecordMetadata,
    ) -> Result<(), WorkingSetError> {
        self.edit(id, |dataset| dataset.set_metadata(metadata))
    }

    /// Index of a dataset in display order
    pub fn position(&self, id: &DatasetId) -> Option<usize> {
        self.entries.iter().position(|e| e.dataset.id() == id)
    }

    /// Append a dataset
    pub fn push(&mut self, dataset: Dataset) {
        let id = *dataset.id();
        self.entries.push(Entry {
            dataset,
            submitting: false,
        });
        self.notify(WorkingSetEvent::Added(id));
    }

    /// Parse each file and append the ones that yield a series.
    ///
    /// Files are independent: an unreadable or empty file is reported in the
    /// returned [`LoadReport`] and does not affect the others.
    pub fn load_files<I, P>(&mut self, paths: I) -> LoadReport
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut report = LoadReport::default();
        for path in paths {
            let path = path.as_ref();
            match Dataset::from_file(path) {
                Ok(dataset) => {
                    info!(
                        "Loaded {} ({} points)",
                        path.display(),
                        dataset.series().len()
                    );
                    report.loaded.push(*dataset.id());
                    self.push(dataset);
                }
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    report.failed.push((path.to_path_buf(), e));
                }
            }
        }
        report
    }

    /// Remove a dataset, returning it if present
    pub fn remove(&mut self, id: &DatasetId) -> Option<Dataset> {
        let index = self.position(id)?;
        let entry = self.entries.remove(index);
        self.notify(WorkingSetEvent::Removed(*id));
        Some(entry.dataset)
    }

    /// Remove every dataset
    pub fn clear(&mut self) {
        self.entries.clear();
        self.notify(WorkingSetEvent::Cleared);
    }

    /// Replace the entry for `previous` with `dataset`, keeping its position.
    ///
    /// Appends instead if `previous` is no longer present.
    pub fn replace(&mut self, previous: &DatasetId, dataset: Dataset) {
        let current = *dataset.id();
        match self.position(previous) {
            Some(index) => {
                self.entries[index] = Entry {
                    dataset,
                    submitting: false,
                };
                self.notify(WorkingSetEvent::Replaced {
                    previous: *previous,
                    current,
                });
            }
            None => self.push(dataset),
        }
    }

    /// True while a save or delete for this dataset is outstanding
    pub fn is_submitting(&self, id: &DatasetId) -> bool {
        self.position(id)
            .map(|i| self.entries[i].submitting)
            .unwrap_or(false)
    }

    /// Mark a dataset as having a request in flight.
    ///
    /// Fails if the dataset is unknown or already marked.
    pub fn begin_submit(&mut self, id: &DatasetId) -> Result<(), WorkingSetError> {
        let index = self
            .position(id)
            .ok_or(WorkingSetError::UnknownDataset(*id))?;
        let entry = &mut self.entries[index];
        if entry.submitting {
            return Err(WorkingSetError::AlreadySubmitting(*id));
        }
        entry.submitting = true;
        Ok(())
    }

    /// Clear the in-flight mark; a no-op if the dataset is gone
    pub fn finish_submit(&mut self, id: &DatasetId) {
        if let Some(index) = self.position(id) {
            self.entries[index].submitting = false;
        }
    }

    /// Apply an in-place edit. Identity is only ever changed by `replace`, and
    /// an entry with a request in flight is left alone.
    fn edit(
        &mut self,
        id: &DatasetId,
        apply: impl FnOnce(&mut Dataset),
    ) -> Result<(), WorkingSetError> {
        let index = self
            .position(id)
            .ok_or(WorkingSetError::UnknownDataset(*id))?;
        let entry = &mut self.entries[index];
        if entry.submitting {
            return Err(WorkingSetError::AlreadySubmitting(*id));
        }
        apply(&mut entry.dataset);
        self.notify(WorkingSetEvent::Edited(*id));
        Ok(())
    }

    fn notify(&mut self, event: WorkingSetEvent) {
        self.revision += 1;
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

impl fmt::Debug for WorkingSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkingSet")
            .field("datasets", &self.entries.iter().map(|e| e.dataset.id()).collect::<Vec<_>>())
            .field("listeners", &self.listeners.len())
            .field("revision", &self.revision)
            .finish()
    }
}

impl<'a> IntoIterator for &'a WorkingSet {
    type Item = &'a Dataset;
    type IntoIter = Box<dyn Iterator<Item = &'a Dataset> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
