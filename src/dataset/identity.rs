use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Client-generated identity for a dataset that has never been saved.
///
/// Backed by a random (v4) UUID, so two calls to [`LocalId::generate`] collide
/// only with cryptographically negligible probability. A local identity is
/// never sent to the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalId(Uuid);

impl LocalId {
    /// Generate a fresh local identity
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for LocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "local:{}", self.0)
    }
}

/// Primary key assigned by the remote store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteId(pub i64);

impl RemoteId {
    /// Raw integer key
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RemoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a dataset: either local-only or remote-assigned, never both.
///
/// A dataset is persisted exactly when its identity is [`DatasetId::Remote`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetId {
    /// Not yet saved; generated on this client
    Local(LocalId),
    /// Saved; key assigned by the remote store
    Remote(RemoteId),
}

impl DatasetId {
    /// Fresh local identity
    pub fn new_local() -> Self {
        Self::Local(LocalId::generate())
    }

    /// True iff the identity was assigned by the remote store
    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// Remote key, if persisted
    pub fn remote(&self) -> Option<RemoteId> {
        match self {
            Self::Local(_) => None,
            Self::Remote(id) => Some(*id),
        }
    }
}

impl From<RemoteId> for DatasetId {
    fn from(id: RemoteId) -> Self {
        Self::Remote(id)
    }
}

impl From<LocalId> for DatasetId {
    fn from(id: LocalId) -> Self {
        Self::Local(id)
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(id) => id.fmt(f),
            Self::Remote(id) => write!(f, "remote:{}", id),
        }
    }
}
