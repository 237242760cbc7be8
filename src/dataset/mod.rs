//! # Dataset Module
//!
//! Datasets live in one of two identity spaces:
//!
//! - [`DatasetId::Local`]: a random UUID generated when a file is loaded. Never
//!   sent to the remote store.
//! - [`DatasetId::Remote`]: the integer key assigned by the remote store.
//!
//! A dataset is *persisted* exactly when its identity is remote. The switch from
//! local to remote happens once, when a create succeeds, and the local identity
//! is dropped rather than kept as an alias.
//!
//! The module also holds the periodic-table [`Element`] enumeration, validated
//! [`RecordMetadata`] (with the raw [`SaveForm`] it comes from), the
//! [`PersistedRecord`] read adapter and the [`WorkingSet`] of datasets on screen.

mod element;
mod error;
mod form;
mod identity;
mod metadata;
mod record;
mod types;
mod working_set;


pub use element::Element;
pub use error::{FormError, WorkingSetError};
pub use form::SaveForm;
pub use identity::{DatasetId, LocalId, RemoteId};
pub use metadata::{date_stamp, derive_display_name, RecordMetadata};
pub use record::{parse_timestamp, PersistedRecord};
pub use types::Dataset;
pub use working_set::{LoadReport, WorkingSet, WorkingSetEvent};
