use thiserror::Error;
use toonlist_lib::{ExportError, ScanError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The library directory could not be scanned
    #[error("{0}")]
    Scan(#[from] ScanError),

    /// Writing the spreadsheet failed
    #[error("export failed: {0}")]
    Export(#[from] ExportError),

    /// Settings could not be read or written
    #[error("config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
