//! Spreadsheet export of a scanned catalog.
//!
//! Each export is a new CSV file named `webtoons-<timestamp>.csv` in the
//! output directory. When an earlier export exists there, rows that were not
//! in it are marked `NEW` and titles that disappeared are counted.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Serialize;
use toonlist_core::Webtoon;

use crate::error::ExportError;

const EXPORT_PREFIX: &str = "webtoons-";
const EXPORT_EXTENSION: &str = "csv";
const STAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

const PLATFORM_COLUMN: &str = "Platform";
const TITLE_COLUMN: &str = "Title";
const NEW_STATUS: &str = "NEW";

/// One spreadsheet row. Field order is column order.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Platform")]
    platform: &'a str,
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "Authors")]
    authors: String,
    #[serde(rename = "Completed")]
    completed: &'static str,
    #[serde(rename = "Creation Time")]
    creation_time: &'a str,
    #[serde(rename = "Extension")]
    extension: &'a str,
    #[serde(rename = "Size")]
    size: u64,
    #[serde(rename = "Status")]
    status: &'static str,
}

impl<'a> ExportRow<'a> {
    fn new(webtoon: &'a Webtoon, is_new: bool) -> Self {
        Self {
            platform: webtoon.platform(),
            title: webtoon.title(),
            authors: webtoon.authors().join(", "),
            completed: if webtoon.completed() { "Y" } else { "N" },
            creation_time: webtoon.creation_time(),
            extension: webtoon.file_extension(),
            size: webtoon.size(),
            status: if is_new { NEW_STATUS } else { "" },
        }
    }
}

/// What an export wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    /// The earlier export this one was compared against, if any.
    pub previous: Option<PathBuf>,
    pub total: usize,
    /// Rows not present in the previous export.
    pub added: usize,
    /// Previous rows with no counterpart in this export.
    pub removed: usize,
}

/// File name for an export written at `now`.
pub fn export_file_name(now: NaiveDateTime) -> String {
    format!(
        "{EXPORT_PREFIX}{}.{EXPORT_EXTENSION}",
        now.format(STAMP_FORMAT)
    )
}

fn is_export_file_name(name: &str) -> bool {
    name.starts_with(EXPORT_PREFIX)
        && Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(EXPORT_EXTENSION))
}

/// Find the most recent export in `dir`.
///
/// The timestamp in the name sorts chronologically, so the greatest name
/// wins. A missing directory has no exports.
pub fn find_latest_export(dir: &Path) -> std::io::Result<Option<PathBuf>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    let latest = entries
        .flatten()
        .filter(|e| e.path().is_file())
        .filter_map(|e| e.file_name().to_str().map(str::to_string))
        .filter(|name| is_export_file_name(name))
        .max();

    Ok(latest.map(|name| dir.join(name)))
}

/// Write `webtoons` to a fresh export with no status column values.
pub fn create_export(
    dir: &Path,
    webtoons: &[Webtoon],
    now: NaiveDateTime,
) -> Result<ExportSummary, ExportError> {
    let path = dir.join(export_file_name(now));
    write_rows(&path, webtoons, |_| false)?;
    log::info!("Created {}", path.display());

    Ok(ExportSummary {
        path,
        previous: None,
        total: webtoons.len(),
        added: webtoons.len(),
        removed: 0,
    })
}

/// Write a new export, marking rows that were not in `previous`.
pub fn update_export(
    dir: &Path,
    previous: &Path,
    webtoons: &[Webtoon],
    now: NaiveDateTime,
) -> Result<ExportSummary, ExportError> {
    let known = read_export_keys(previous)?;
    let current: HashSet<(String, String)> = webtoons.iter().map(catalog_key).collect();

    let path = dir.join(export_file_name(now));
    let added = write_rows(&path, webtoons, |w| !known.contains(&catalog_key(w)))?;
    let removed = known.difference(&current).count();
    log::info!(
        "Updated {} from {} ({} new, {} removed)",
        path.display(),
        previous.display(),
        added,
        removed
    );

    Ok(ExportSummary {
        path,
        previous: Some(previous.to_path_buf()),
        total: webtoons.len(),
        added,
        removed,
    })
}

/// Export to `dir`, updating from the latest earlier export if there is one.
pub fn export_catalog(
    dir: &Path,
    webtoons: &[Webtoon],
    now: NaiveDateTime,
) -> Result<ExportSummary, ExportError> {
    std::fs::create_dir_all(dir)?;
    match find_latest_export(dir)? {
        Some(previous) => update_export(dir, &previous, webtoons, now),
        None => create_export(dir, webtoons, now),
    }
}

fn catalog_key(webtoon: &Webtoon) -> (String, String) {
    (webtoon.platform().to_string(), webtoon.title().to_string())
}

/// Write all rows and return how many were marked new.
fn write_rows(
    path: &Path,
    webtoons: &[Webtoon],
    is_new: impl Fn(&Webtoon) -> bool,
) -> Result<usize, ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    let mut added = 0;
    for webtoon in webtoons {
        let new = is_new(webtoon);
        if new {
            added += 1;
        }
        writer.serialize(ExportRow::new(webtoon, new))?;
    }
    if webtoons.is_empty() {
        // serialize() writes the header lazily; keep empty exports readable.
        writer.write_record([
            PLATFORM_COLUMN,
            TITLE_COLUMN,
            "Authors",
            "Completed",
            "Creation Time",
            "Extension",
            "Size",
            "Status",
        ])?;
    }
    writer.flush()?;
    Ok(added)
}

/// Read the (platform, title) pairs of an earlier export.
fn read_export_keys(path: &Path) -> Result<HashSet<(String, String)>, ExportError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ExportError::malformed(path, format!("missing '{name}' column")))
    };
    let platform_idx = column(PLATFORM_COLUMN)?;
    let title_idx = column(TITLE_COLUMN)?;

    let mut keys = HashSet::new();
    for record in reader.records() {
        let record = record?;
        if let (Some(platform), Some(title)) = (record.get(platform_idx), record.get(title_idx)) {
            keys.insert((platform.to_string(), title.to_string()));
        }
    }
    Ok(keys)
}

#[cfg(test)]
#[path = "tests/export_tests.rs"]
mod tests;
