//! # Reconciliation
//!
//! For every save the [`Reconciler`] decides whether the remote store should
//! create a new record or update an existing one:
//!
//! | Identity | Existence check | Confirmation | Write |
//! |----------|-----------------|--------------|-------|
//! | `Local` | none | none | `create` |
//! | `Remote(id)`, absent | `exists(id)` = false | none | `create` |
//! | `Remote(id)`, present | `exists(id)` = true | required | `update(id)` |
//!
//! A failed existence check is reported as
//! [`SaveError::ExistenceCheckFailed`] and never treated as "absent", which
//! would turn an intended update into a duplicate.
//! Overwrites need explicit approval from the caller-supplied [`Confirm`].
//!
//! Nothing is retried automatically.

mod confirm;
mod engine;
mod error;


pub use confirm::{AlwaysConfirm, Confirm, NeverConfirm, OverwriteRequest};
pub use engine::{Reconciler, SaveAction, SaveOutcome};
pub use error::{DeleteError, FetchError, SaveError};
