use serde::Serialize;

use crate::classify::ClassifiedName;
use crate::error::ClassifyError;
use crate::platform::resolve_platform;

/// One cataloged webtoon archive.
///
/// Only [`Webtoon::build`] creates values of this type, so every field is
/// populated and `authors` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Webtoon {
    title: String,
    authors: Vec<String>,
    platform: String,
    completed: bool,
    creation_time: String,
    file_extension: String,
    size: u64,
}

/// Inputs to [`Webtoon::build`].
///
/// The first five fields come from the filename classifier and the creation
/// time lookup and may be missing; extension and size come straight from
/// the directory entry.
#[derive(Debug, Clone, Default)]
pub struct WebtoonFields {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    /// Resolved platform name (or the raw acronym when unknown).
    pub platform: Option<String>,
    pub completed: Option<bool>,
    /// Creation time formatted as `yyyy-MM-dd HH:mm:ss`.
    pub creation_time: Option<String>,
    pub file_extension: String,
    pub size: u64,
}

impl WebtoonFields {
    /// Fill the classifier-derived fields from a classification result.
    ///
    /// A failed classification leaves them empty, which makes the build
    /// produce a placeholder.
    pub fn from_classified(
        classified: Result<ClassifiedName, ClassifyError>,
        creation_time: Option<String>,
        file_extension: impl Into<String>,
        size: u64,
    ) -> Self {
        let mut fields = Self {
            creation_time,
            file_extension: file_extension.into(),
            size,
            ..Self::default()
        };
        if let Ok(name) = classified {
            fields.platform = Some(resolve_platform(&name.platform_acronym));
            fields.title = Some(name.title);
            fields.authors = Some(name.authors);
            fields.completed = Some(name.completed);
        }
        fields
    }
}

/// Result of building a record: complete, or a placeholder meaning "skip".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    Complete(Webtoon),
    Placeholder,
}

impl Webtoon {
    /// Build a record, or a placeholder if any classifier-derived field is
    /// missing or the author list is empty.
    pub fn build(fields: WebtoonFields) -> BuildOutcome {
        let WebtoonFields {
            title: Some(title),
            authors: Some(authors),
            platform: Some(platform),
            completed: Some(completed),
            creation_time: Some(creation_time),
            file_extension,
            size,
        } = fields
        else {
            return BuildOutcome::Placeholder;
        };

        if authors.is_empty() {
            return BuildOutcome::Placeholder;
        }

        BuildOutcome::Complete(Self {
            title,
            authors,
            platform,
            completed,
            creation_time,
            file_extension,
            size,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn creation_time(&self) -> &str {
        &self.creation_time
    }

    pub fn file_extension(&self) -> &str {
        &self.file_extension
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Catalog ordering: platform, then title, both byte-wise ascending.
    pub fn catalog_order(&self, other: &Self) -> std::cmp::Ordering {
        self.platform
            .cmp(&other.platform)
            .then_with(|| self.title.cmp(&other.title))
    }
}

impl std::fmt::Display for Webtoon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} - {}",
            self.platform,
            self.title,
            self.authors.join(", ")
        )?;
        if self.completed {
            f.write_str(" (completed)")?;
        }
        Ok(())
    }
}
