use std::path::PathBuf;

use thiserror::Error;
use toonlist_core::ClassifyError;

/// Errors raised while scanning a webtoon directory.
///
/// Only [`ScanError::DirectoryUnreadable`] is returned from a scan; the
/// per-entry variants are logged and the entry is skipped.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The directory itself could not be listed
    #[error("cannot read directory {}: {source}", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Creation time or size could not be read for an entry
    #[error("metadata unavailable for {}: {source}", .path.display())]
    MetadataUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The filename does not follow the naming convention
    #[error("cannot classify {}: {source}", .path.display())]
    Unclassifiable {
        path: PathBuf,
        #[source]
        source: ClassifyError,
    },

    /// The filename decoded but left a required field empty
    #[error("incomplete webtoon information for {}", .path.display())]
    Incomplete { path: PathBuf },
}

/// Errors raised while writing or reading a catalog export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding or decoding failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A previous export is missing required columns
    #[error("malformed export {}: {reason}", .path.display())]
    MalformedExport { path: PathBuf, reason: String },
}

impl ExportError {
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedExport {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
