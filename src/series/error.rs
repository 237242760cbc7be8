/// Errors that can occur while turning raw measurement text into a [`Series`](super::Series)
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// No line of the input yielded a numeric `(x, y)` pair
    #[error("No valid data rows found")]
    NoValidRows,

    /// I/O error reading a measurement file
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors raised when assembling a series from separate columns
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// The x and y columns have different lengths
    #[error("Column length mismatch: {x_len} x values, {y_len} y values")]
    LengthMismatch {
        /// Number of x values
        x_len: usize,
        /// Number of y values
        y_len: usize,
    },

    /// A series must hold at least one pair
    #[error("Series is empty")]
    Empty,
}
