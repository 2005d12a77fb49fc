use thiserror::Error;

/// Reasons a base filename does not follow the webtoon naming grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// No `_` separates the platform acronym from the title.
    #[error("missing platform delimiter '_' in \"{0}\"")]
    MissingPlatformDelimiter(String),

    /// No ` - ` separates the title from the author list.
    #[error("missing title delimiter ' - ' in \"{0}\"")]
    MissingTitleDelimiter(String),
}

impl ClassifyError {
    /// The base filename that failed to classify.
    pub fn base_name(&self) -> &str {
        match self {
            Self::MissingPlatformDelimiter(name) | Self::MissingTitleDelimiter(name) => name,
        }
    }
}
