/// Archive formats a webtoon may be stored in.
///
/// This is the closed set of extensions admitted into a scan. Matching is
/// ASCII case-insensitive, so `ZIP` and `Cbz` are accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressionFormat {
    Zip,
    Rar,
    SevenZip,
    Alz,
    Egg,
    Tar,
    Gzip,
    Cbz,
    Cbr,
    Cb7,
}

const ALL_FORMATS: &[CompressionFormat] = &[
    CompressionFormat::Zip,
    CompressionFormat::Rar,
    CompressionFormat::SevenZip,
    CompressionFormat::Alz,
    CompressionFormat::Egg,
    CompressionFormat::Tar,
    CompressionFormat::Gzip,
    CompressionFormat::Cbz,
    CompressionFormat::Cbr,
    CompressionFormat::Cb7,
];

impl CompressionFormat {
    /// Canonical lowercase extension, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Rar => "rar",
            Self::SevenZip => "7z",
            Self::Alz => "alz",
            Self::Egg => "egg",
            Self::Tar => "tar",
            Self::Gzip => "gz",
            Self::Cbz => "cbz",
            Self::Cbr => "cbr",
            Self::Cb7 => "cb7",
        }
    }

    /// Look up a format by file extension (case-insensitive, no leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        ALL_FORMATS
            .iter()
            .copied()
            .find(|format| format.extension().eq_ignore_ascii_case(ext))
    }

    pub fn all() -> &'static [CompressionFormat] {
        ALL_FORMATS
    }
}

impl std::fmt::Display for CompressionFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Admission gate for a scan: a regular file with a known archive extension.
///
/// Directories are rejected even when their name ends in an archive
/// extension.
pub fn is_eligible_archive(is_file: bool, extension: &str) -> bool {
    is_file && CompressionFormat::from_extension(extension).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_lookup_ignores_case() {
        assert_eq!(CompressionFormat::from_extension("zip"), Some(CompressionFormat::Zip));
        assert_eq!(CompressionFormat::from_extension("ZIP"), Some(CompressionFormat::Zip));
        assert_eq!(CompressionFormat::from_extension("Cb7"), Some(CompressionFormat::Cb7));
        assert_eq!(CompressionFormat::from_extension("7Z"), Some(CompressionFormat::SevenZip));
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        assert_eq!(CompressionFormat::from_extension("txt"), None);
        assert_eq!(CompressionFormat::from_extension(""), None);
        assert_eq!(CompressionFormat::from_extension(".zip"), None);
        assert_eq!(CompressionFormat::from_extension("zipx"), None);
    }

    #[test]
    fn every_format_round_trips_through_its_extension() {
        for &format in CompressionFormat::all() {
            assert_eq!(CompressionFormat::from_extension(format.extension()), Some(format));
        }
    }

    #[test]
    fn directories_are_never_eligible() {
        assert!(is_eligible_archive(true, "rar"));
        assert!(!is_eligible_archive(false, "rar"));
        assert!(!is_eligible_archive(true, "txt"));
    }
}
