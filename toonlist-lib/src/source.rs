//! Directory listing and file metadata behind a trait.
//!
//! The scanner only needs a flat listing and two metadata values per file,
//! so both are provided through [`EntrySource`]. [`FsSource`] is the real
//! filesystem; tests can supply their own listings.

use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};

/// Format used for the catalog's creation time column.
pub const CREATION_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub path: PathBuf,
    /// Regular file (after following symlinks). Directories, sockets,
    /// FIFOs and device nodes are `false`.
    pub is_file: bool,
}

impl DirEntryInfo {
    /// File name without its extension. Non-UTF-8 bytes are replaced.
    pub fn base_name(&self) -> Cow<'_, str> {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default()
    }

    /// Extension without the leading dot, or `""` when there is none.
    pub fn extension(&self) -> &str {
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
    }

    /// Full file name for display.
    pub fn display_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("?")
    }
}

/// Metadata the catalog records for each archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMetadata {
    pub created: SystemTime,
    pub size: u64,
}

impl FileMetadata {
    /// Creation time in local time as `yyyy-MM-dd HH:mm:ss`.
    pub fn creation_time(&self) -> String {
        format_creation_time(self.created)
    }
}

/// Provides directory listings and per-file metadata to the scanner.
pub trait EntrySource {
    /// List the immediate entries of `dir`. Failure here aborts the scan.
    fn list(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>>;

    /// Read creation time and size for one file.
    fn metadata(&self, path: &Path) -> io::Result<FileMetadata>;
}

/// [`EntrySource`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl EntrySource for FsSource {
    fn list(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    log::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                    continue;
                }
            };
            let path = entry.path();
            // Follows symlinks, so a link to an archive counts as a file.
            let is_file = path.is_file();
            entries.push(DirEntryInfo { path, is_file });
        }
        Ok(entries)
    }

    fn metadata(&self, path: &Path) -> io::Result<FileMetadata> {
        let meta = std::fs::metadata(path)?;
        let created = match meta.created() {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::Unsupported => {
                log::debug!(
                    "Creation time unsupported for {}, using modification time",
                    path.display()
                );
                meta.modified()?
            }
            Err(e) => return Err(e),
        };
        Ok(FileMetadata {
            created,
            size: meta.len(),
        })
    }
}

/// Format a timestamp in local time as `yyyy-MM-dd HH:mm:ss`.
pub fn format_creation_time(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format(CREATION_TIME_FORMAT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_name_parts() {
        let entry = DirEntryInfo {
            path: PathBuf::from("/library/NA_Solo Leveling - Chugong [完].zip"),
            is_file: true,
        };
        assert_eq!(entry.base_name(), "NA_Solo Leveling - Chugong [完]");
        assert_eq!(entry.extension(), "zip");
        assert_eq!(entry.display_name(), "NA_Solo Leveling - Chugong [完].zip");
    }

    #[test]
    fn entry_without_extension() {
        let entry = DirEntryInfo {
            path: PathBuf::from("/library/README"),
            is_file: true,
        };
        assert_eq!(entry.extension(), "");
        assert_eq!(entry.base_name(), "README");
    }

    #[test]
    fn creation_time_shape() {
        let formatted = format_creation_time(SystemTime::UNIX_EPOCH);
        // Local offset varies, so check the shape rather than the value.
        assert_eq!(formatted.len(), "yyyy-MM-dd HH:mm:ss".len());
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[10..11], " ");
        assert_eq!(&formatted[13..14], ":");
    }

    #[test]
    fn fs_source_lists_files_and_dirs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("NA_A - B.zip"), b"abc").unwrap();
        std::fs::create_dir(dir.path().join("sub.zip")).unwrap();

        let mut entries = FsSource.list(dir.path()).unwrap();
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_file);
        assert!(!entries[1].is_file);

        let meta = FsSource.metadata(&entries[0].path).unwrap();
        assert_eq!(meta.size, 3);
    }

    #[cfg(unix)]
    #[test]
    fn sockets_are_not_files() {
        use std::os::unix::net::UnixListener;

        let dir = tempfile::tempdir().unwrap();
        let _listener = UnixListener::bind(dir.path().join("NA_Socket - A.zip")).unwrap();

        let entries = FsSource.list(dir.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].is_file);
    }

    #[test]
    fn fs_source_missing_directory_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FsSource.list(&dir.path().join("missing")).is_err());
    }
}
