//! # Export Formatter
//!
//! Turns a persisted record into a two-column `(2θ, Intensity)` table named
//! after its date, material, elements and temperature, e.g.
//! `20250304_Si_[Si-O]_300K.xlsx`.
//!
//! The default [`ExportFormat::Xlsx`] writes a workbook with a single sheet
//! named [`SHEET_NAME`]. [`ExportFormat::Csv`] writes the same table as plain
//! text.
//!
//! Formatting is pure. Only the `write_*` methods and [`write_to_dir`] touch
//! IO.

mod artifact;
mod error;


pub use artifact::{
    file_stem, format, format_dataset, write_to_dir, ExportFormat, TabularArtifact, HEADER,
    SHEET_NAME,
};
pub use error::ExportError;
