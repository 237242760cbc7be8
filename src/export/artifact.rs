use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::info;
use rust_xlsxwriter::Workbook;

use super::ExportError;
use crate::dataset::{date_stamp, Dataset, PersistedRecord, RecordMetadata};

/// Sheet name carried by every export
pub const SHEET_NAME: &str = "XRD data";

/// Column headers: diffraction angle then intensity
pub const HEADER: [&str; 2] = ["2θ", "Intensity"];

/// Width of both spreadsheet columns, in characters
const COLUMN_WIDTH: f64 = 12.0;

/// File format of an export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Excel workbook with a single `XRD data` sheet
    #[default]
    Xlsx,
    /// Plain comma-separated values; carries no sheet name
    Csv,
}

impl ExportFormat {
    /// File extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }
}

/// A two-column table ready to be written out
#[derive(Debug, Clone, PartialEq)]
pub struct TabularArtifact {
    /// Derived file name without extension
    pub file_stem: String,
    /// Sheet name
    pub sheet_name: String,
    /// Column headers
    pub header: [String; 2],
    /// `(angle, intensity)` rows in original series order
    pub rows: Vec<(f64, f64)>,
}

impl TabularArtifact {
    /// File name for the given format
    pub fn file_name(&self, format: ExportFormat) -> String {
        format!("{}.{}", self.file_stem, format.extension())
    }

    /// Write a workbook holding one sheet named [`sheet_name`](Self::sheet_name)
    pub fn write_xlsx<W: Write>(&self, mut writer: W) -> Result<(), ExportError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;

        for (col, title) in (0u16..).zip(&self.header) {
            worksheet.write_string(0, col, title)?;
            worksheet.set_column_width(col, COLUMN_WIDTH)?;
        }
        for (row, (angle, intensity)) in (1u32..).zip(&self.rows) {
            worksheet.write_number(row, 0, *angle)?;
            worksheet.write_number(row, 1, *intensity)?;
        }

        writer.write_all(&workbook.save_to_buffer()?)?;
        writer.flush()?;
        Ok(())
    }

    /// Write header and rows as CSV
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(&self.header)?;
        for (angle, intensity) in &self.rows {
            csv_writer.write_record([angle.to_string(), intensity.to_string()])?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Write the artifact into `dir` under its file name, creating the
    /// directory if needed. Returns the written path.
    pub fn write_to_dir<P: AsRef<Path>>(
        &self,
        dir: P,
        format: ExportFormat,
    ) -> Result<PathBuf, ExportError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let path = dir.join(self.file_name(format));
        let writer = BufWriter::new(File::create(&path)?);
        match format {
            ExportFormat::Xlsx => self.write_xlsx(writer)?,
            ExportFormat::Csv => self.write_csv(writer)?,
        }

        info!("Exported {} rows to {}", self.rows.len(), path.display());
        Ok(path)
    }
}

/// Export file name without extension: `YYYYMMDD_material_[El1-El2]_TK`.
///
/// Path separators in the material are replaced with `_` so the name always
/// stays a single path component.
pub fn file_stem(metadata: &RecordMetadata, updated_at: &DateTime<Utc>) -> String {
    let material = metadata.material().replace(['/', '\\'], "_");
    format!(
        "{}_{}_[{}]_{}K",
        date_stamp(updated_at),
        material,
        metadata.element_list(),
        metadata.temperature()
    )
}

/// Build the export table for a persisted record
pub fn format(record: &PersistedRecord) -> TabularArtifact {
    TabularArtifact {
        file_stem: file_stem(record.metadata(), &record.updated_at()),
        sheet_name: SHEET_NAME.to_string(),
        header: HEADER.map(String::from),
        rows: record.series().pairs().collect(),
    }
}

/// Build the export table for a working-set entry.
///
/// Fails with [`ExportError::NotPersisted`] for datasets that have not been
/// saved yet.
pub fn format_dataset(dataset: &Dataset) -> Result<TabularArtifact, ExportError> {
    dataset
        .to_record()
        .map(|record| format(&record))
        .ok_or_else(|| ExportError::NotPersisted(dataset.display_name().to_string()))
}

/// Format `record` and write it into `dir`
pub fn write_to_dir<P: AsRef<Path>>(
    record: &PersistedRecord,
    dir: P,
    format: ExportFormat,
) -> Result<PathBuf, ExportError> {
    self::format(record).write_to_dir(dir, format)
}
