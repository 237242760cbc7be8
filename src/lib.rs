//! # xrdview - X-ray Diffraction Pattern Viewer Core
//!
//! `xrdview` loads diffraction-pattern text files, prepares several patterns
//! for a shared log-intensity chart, and keeps named records in a remote store
//! in sync with the patterns a user is working on.
//!
//! ## Key Features
//!
//! - **Robust parsing**: Two-column `2θ intensity` text is read line by line;
//!   headers, comments and malformed rows are skipped, never fatal.
//!
//! - **Two identity spaces**: Datasets loaded from disk carry a client-generated
//!   [`LocalId`](dataset::LocalId); datasets fetched from or saved to the store
//!   carry the server-assigned [`RemoteId`](dataset::RemoteId). The kind of
//!   identity alone decides between create and update.
//!
//! - **Confirmed overwrites**: Updating an existing remote record requires an
//!   explicit approval through an injected [`Confirm`](reconcile::Confirm).
//!
//! - **Deterministic rendering**: Series at position `i` are colored from a
//!   fixed palette and offset by `10^i` so stacked curves stay apart on a log
//!   axis.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use xrdview::dataset::{Dataset, SaveForm, WorkingSet};
//! use xrdview::reconcile::{AlwaysConfirm, Reconciler};
//! use xrdview::remote::HttpRecordStore;
//! use xrdview::render::{ChartOptions, ChartSpec};
//!
//! let mut set = WorkingSet::new();
//! let report = set.load_files(["si_300K.xy", "si_10K.xy"]);
//! for (path, err) in &report.failed {
//!     eprintln!("{}: {}", path.display(), err);
//! }
//!
//! let chart = ChartSpec::build(&set, ChartOptions::default());
//! println!("{}", chart.to_json()?);
//!
//! let form = SaveForm {
//!     owner: "alice".into(),
//!     material: "Si".into(),
//!     elements: vec!["Si".into()],
//!     temperature: 300.0,
//! };
//! let fields = form.validate()?;
//!
//! let reconciler = Reconciler::new(HttpRecordStore::new("http://localhost:8000/api/v1")?);
//! let first_id = set.iter().next().map(|d| *d.id());
//! if let Some(id) = first_id {
//!     let saved = reconciler.save_in(&mut set, &id, &fields, &mut AlwaysConfirm)?;
//!     println!("Saved as {}", saved);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`series`]: Text parser producing numeric `(2θ, intensity)` series
//! - [`dataset`]: Identity model, record metadata, save form and working set
//! - [`remote`]: Record store boundary and its HTTP implementation
//! - [`reconcile`]: Create-versus-update decisions for saves and deletes
//! - [`render`]: Chart preparation with per-series color and offset
//! - [`export`]: Tabular export of persisted records
//!
//! ## Remote Contract
//!
//! | Method | Path | Body | Response |
//! |--------|------|------|----------|
//! | GET | `/records` | | array of records |
//! | GET | `/records/{id}/exists` | | boolean |
//! | POST | `/records` | payload | created record |
//! | PUT | `/records/{id}` | payload | updated record |
//! | DELETE | `/records/{id}` | | |
//!
//! Records are JSON objects
//! `{id, owner, material, elements, temperature, x, y, updatedAt}`; payloads
//! are the same without `id` and `updatedAt`.

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod dataset;
pub mod export;
pub mod reconcile;
pub mod remote;
pub mod render;
pub mod series;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::dataset::{
        Dataset, DatasetId, Element, FormError, LoadReport, LocalId, PersistedRecord,
        RecordMetadata, RemoteId, SaveForm, WorkingSet, WorkingSetError, WorkingSetEvent,
    };
    pub use crate::export::{ExportError, ExportFormat, TabularArtifact};
    pub use crate::reconcile::{
        AlwaysConfirm, Confirm, DeleteError, FetchError, NeverConfirm, OverwriteRequest,
        Reconciler, SaveAction, SaveError, SaveOutcome,
    };
    pub use crate::remote::{BoundaryError, ErrorBody, HttpRecordStore, RecordStore};
    pub use crate::render::{prepare, ChartOptions, ChartSpec, RenderSeries};
    pub use crate::series::{parse, ParseError, Series, SeriesError};
}
