//! Directory scanner that turns webtoon archives into a sorted catalog.
//!
//! One synchronous pass: list the directory, admit archives by extension,
//! decode each filename, attach creation time and size, then sort by
//! platform and title. A bad entry is logged and skipped; only a directory
//! that cannot be listed fails the scan.

use std::path::Path;

use toonlist_core::util::pluralize;
use toonlist_core::{BuildOutcome, Webtoon, WebtoonFields, classify, is_eligible_archive};

use crate::error::ScanError;
use crate::source::{DirEntryInfo, EntrySource};

/// Progress update sent during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanProgress {
    /// Listing finished; `total` archives will be processed.
    Started { total: usize },
    /// About to process the archive at `index` (0-based).
    Entry { index: usize, name: String },
    /// Scan finished.
    Finished { found: usize, skipped: usize },
}

/// The sorted result of a scan.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    webtoons: Vec<Webtoon>,
    skipped: usize,
}

impl Catalog {
    /// Records ordered by platform, then title.
    pub fn webtoons(&self) -> &[Webtoon] {
        &self.webtoons
    }

    pub fn len(&self) -> usize {
        self.webtoons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.webtoons.is_empty()
    }

    /// Archives that were admitted but could not be cataloged.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Scan `dir` and build a catalog of every well-formed archive in it.
///
/// `on_progress` is called once with [`ScanProgress::Started`], once per
/// admitted archive, and once with [`ScanProgress::Finished`].
pub fn scan_webtoons(
    source: &dyn EntrySource,
    dir: &Path,
    on_progress: &mut dyn FnMut(ScanProgress),
) -> Result<Catalog, ScanError> {
    let mut entries = source
        .list(dir)
        .map_err(|e| ScanError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source: e,
        })?;
    entries.retain(|entry| is_eligible_archive(entry.is_file, entry.extension()));
    entries.sort_by(|a, b| a.path.cmp(&b.path));

    on_progress(ScanProgress::Started {
        total: entries.len(),
    });

    let mut webtoons = Vec::with_capacity(entries.len());
    let mut skipped = 0;

    for (index, entry) in entries.iter().enumerate() {
        on_progress(ScanProgress::Entry {
            index,
            name: entry.display_name().to_string(),
        });

        match catalog_entry(source, entry) {
            Ok(webtoon) => {
                log::debug!("{}", webtoon);
                webtoons.push(webtoon);
            }
            Err(e) => {
                log::warn!("Skipping {}", e);
                skipped += 1;
            }
        }
    }

    log::debug!("Total {}", pluralize(webtoons.len(), "webtoon"));

    webtoons.sort_by(Webtoon::catalog_order);

    on_progress(ScanProgress::Finished {
        found: webtoons.len(),
        skipped,
    });

    Ok(Catalog { webtoons, skipped })
}

/// Classify one admitted archive and build its record.
///
/// The classifier result goes to the builder as is; a placeholder is
/// reported with the classifier's reason when there is one.
fn catalog_entry(source: &dyn EntrySource, entry: &DirEntryInfo) -> Result<Webtoon, ScanError> {
    let classified = classify(&entry.base_name());
    let reason = classified.as_ref().err().cloned();

    let meta = source
        .metadata(&entry.path)
        .map_err(|e| ScanError::MetadataUnavailable {
            path: entry.path.clone(),
            source: e,
        })?;

    let fields = WebtoonFields::from_classified(
        classified,
        Some(meta.creation_time()),
        entry.extension(),
        meta.size,
    );
    match Webtoon::build(fields) {
        BuildOutcome::Complete(webtoon) => Ok(webtoon),
        BuildOutcome::Placeholder => Err(match reason {
            Some(source) => ScanError::Unclassifiable {
                path: entry.path.clone(),
                source,
            },
            None => ScanError::Incomplete {
                path: entry.path.clone(),
            },
        }),
    }
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
