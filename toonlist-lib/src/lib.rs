//! Directory scanning, catalog export and settings for webtoon archives.
//!
//! The filename grammar and record types live in `toonlist-core` and are
//! re-exported here so frontends only need this crate.

pub mod error;
pub mod export;
pub mod scanner;
pub mod settings;
pub mod source;

pub use error::{ExportError, ScanError};
pub use export::{ExportSummary, export_catalog};
pub use scanner::{Catalog, ScanProgress, scan_webtoons};
pub use source::{DirEntryInfo, EntrySource, FileMetadata, FsSource};

pub use toonlist_core::util;
pub use toonlist_core::{
    BuildOutcome, ClassifiedName, ClassifyError, CompressionFormat, Platform, Webtoon,
    WebtoonFields, classify, resolve_platform,
};
