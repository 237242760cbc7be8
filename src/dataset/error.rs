use super::DatasetId;

/// Validation failures for the metadata attached to a save request
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    /// Owner name is blank
    #[error("Owner name is required")]
    MissingOwner,

    /// Material label is blank
    #[error("Material name is required")]
    MissingMaterial,

    /// No element was selected
    #[error("At least one element is required")]
    NoElements,

    /// Element symbol not found in the periodic table
    #[error("Unknown element symbol: {0}")]
    UnknownElement(String),

    /// Temperature is negative, NaN or infinite
    #[error("Temperature must be a finite value >= 0 K, got {0}")]
    InvalidTemperature(f64),
}

/// Errors from working set bookkeeping
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorkingSetError {
    /// No dataset with this identity is in the working set
    #[error("Dataset not in working set: {0}")]
    UnknownDataset(DatasetId),

    /// A save or delete for this dataset has not completed yet
    #[error("A request for dataset {0} is already in flight")]
    AlreadySubmitting(DatasetId),
}
