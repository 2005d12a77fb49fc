//! Decoder for the webtoon archive naming convention.
//!
//! Archive base names (the filename without its extension) follow:
//! ```text
//! <Acronym>_<Title> - <Author>[, <Author>...][ [完]]
//! ```
//! For example `NA_Solo Leveling - Chugong [完]` is a completed series on the
//! `NA` platform by a single author.
//!
//! Every delimiter is matched at its first occurrence. A title containing
//! ` - ` or an author containing `, ` is split at the wrong place; the
//! convention has no escaping, so such names are decoded as written.

use crate::error::ClassifyError;

const PLATFORM_DELIMITER: &str = "_";
const TITLE_DELIMITER: &str = " - ";
const AUTHOR_DELIMITER: &str = ", ";
const COMPLETED_MARKER: &str = " [\u{5B8C}]";

/// The parts of an archive base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedName {
    /// Platform acronym as written, before resolution (e.g. "NA").
    pub platform_acronym: String,
    pub title: String,
    /// Authors in filename order. Never empty; an empty author segment
    /// yields a single empty string.
    pub authors: Vec<String>,
    /// Whether the ` [完]` marker is present.
    pub completed: bool,
}

impl ClassifiedName {
    /// Reassemble the base name this was decoded from.
    pub fn to_base_name(&self) -> String {
        let mut name = format!(
            "{}{}{}{}{}",
            self.platform_acronym,
            PLATFORM_DELIMITER,
            self.title,
            TITLE_DELIMITER,
            self.authors.join(AUTHOR_DELIMITER),
        );
        if self.completed {
            name.push_str(COMPLETED_MARKER);
        }
        name
    }
}

/// Decode a base filename into platform acronym, title, authors and the
/// completion flag.
///
/// # Examples
///
/// ```
/// use toonlist_core::classify;
///
/// let name = classify("NA_Solo Leveling - Chugong [完]").unwrap();
/// assert_eq!(name.platform_acronym, "NA");
/// assert_eq!(name.title, "Solo Leveling");
/// assert_eq!(name.authors, vec!["Chugong"]);
/// assert!(name.completed);
///
/// assert!(classify("NoPlatformTitle").is_err());
/// ```
pub fn classify(base_name: &str) -> Result<ClassifiedName, ClassifyError> {
    let (acronym, rest) = base_name
        .split_once(PLATFORM_DELIMITER)
        .ok_or_else(|| ClassifyError::MissingPlatformDelimiter(base_name.to_string()))?;

    let (title, segment) = rest
        .split_once(TITLE_DELIMITER)
        .ok_or_else(|| ClassifyError::MissingTitleDelimiter(base_name.to_string()))?;

    let (author_text, completed) = match segment.find(COMPLETED_MARKER) {
        Some(pos) => (&segment[..pos], true),
        None => (segment, false),
    };

    Ok(ClassifiedName {
        platform_acronym: acronym.to_string(),
        title: title.to_string(),
        authors: author_text.split(AUTHOR_DELIMITER).map(str::to_string).collect(),
        completed,
    })
}

#[cfg(test)]
#[path = "tests/classify_tests.rs"]
mod tests;
