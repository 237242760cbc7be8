/// Errors that can occur while exporting a record
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The dataset has never been saved, so it has no timestamp to name the file by
    #[error("Dataset '{0}' has not been saved; only persisted records can be exported")]
    NotPersisted(String),

    /// IO error while writing the export file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Workbook encoding error
    #[error("XLSX error: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    /// CSV encoding error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}
