//! Error types for reportkit library.

use std::io;
use thiserror::Error;

/// Result type alias for reportkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while composing, storing or exporting documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not a reportkit document container.
    #[error("Unknown file format: not a reportkit document")]
    UnknownFormat,

    /// The container was written by a newer format version.
    #[error("Unsupported document version: {0}")]
    UnsupportedVersion(u32),

    /// The container header is valid but its body could not be decoded.
    #[error("Corrupted document: {0}")]
    Corrupted(String),

    /// A heading was requested with empty text.
    #[error("Heading text must not be empty")]
    EmptyHeading,

    /// A table was requested without any header columns.
    #[error("Table must have at least one header column")]
    EmptyTable,

    /// A data row does not match the header column count.
    #[error("Table row {row} has {found} cells, expected {expected}")]
    RowWidth {
        /// 0-based index of the offending data row
        row: usize,
        /// Number of header columns
        expected: usize,
        /// Number of cells in the row
        found: usize,
    },

    /// A color string is not a 6-digit hex value.
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    /// A document could not be encoded into its container.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The re-read of a freshly written file did not match the document.
    #[error("Save verification failed: {0}")]
    Verification(String),

    /// Error during rendering (Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Error while packing a DOCX export.
    #[error("DOCX export error: {0}")]
    Export(String),
}

impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self {
        Error::Io(err.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownFormat;
        assert_eq!(
            err.to_string(),
            "Unknown file format: not a reportkit document"
        );

        let err = Error::RowWidth {
            row: 2,
            expected: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "Table row 2 has 2 cells, expected 3");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
