/// Webtoon platforms recognized in archive filenames.
///
/// Each platform is keyed by the acronym that prefixes a filename
/// (`NA_Title - Author.zip`). The acronym table is closed: anything not
/// listed here is carried through verbatim by [`resolve_platform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Naver,
    Daum,
    KakaoPage,
    KakaoWebtoon,
    Lezhin,
    Toptoon,
    Toomics,
    Bomtoon,
    Ridibooks,
    MrBlue,
    Peanutoon,
    Justoon,
    Onestory,
    Ktoon,
    Bufftoon,
}

/// All platform variants in table order.
const ALL_PLATFORMS: &[Platform] = &[
    Platform::Naver,
    Platform::Daum,
    Platform::KakaoPage,
    Platform::KakaoWebtoon,
    Platform::Lezhin,
    Platform::Toptoon,
    Platform::Toomics,
    Platform::Bomtoon,
    Platform::Ridibooks,
    Platform::MrBlue,
    Platform::Peanutoon,
    Platform::Justoon,
    Platform::Onestory,
    Platform::Ktoon,
    Platform::Bufftoon,
];

impl Platform {
    /// Acronym used as the filename prefix. Matching is case-sensitive.
    pub fn acronym(&self) -> &'static str {
        match self {
            Self::Naver => "NA",
            Self::Daum => "DA",
            Self::KakaoPage => "KP",
            Self::KakaoWebtoon => "KW",
            Self::Lezhin => "LZ",
            Self::Toptoon => "TT",
            Self::Toomics => "TM",
            Self::Bomtoon => "BT",
            Self::Ridibooks => "RD",
            Self::MrBlue => "MB",
            Self::Peanutoon => "PN",
            Self::Justoon => "JR",
            Self::Onestory => "OT",
            Self::Ktoon => "KT",
            Self::Bufftoon => "BS",
        }
    }

    /// Full display name written to the catalog.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Naver => "Naver Webtoon",
            Self::Daum => "Daum Webtoon",
            Self::KakaoPage => "KakaoPage",
            Self::KakaoWebtoon => "Kakao Webtoon",
            Self::Lezhin => "Lezhin Comics",
            Self::Toptoon => "Toptoon",
            Self::Toomics => "Toomics",
            Self::Bomtoon => "Bomtoon",
            Self::Ridibooks => "Ridibooks",
            Self::MrBlue => "Mr.Blue",
            Self::Peanutoon => "Peanutoon",
            Self::Justoon => "Justoon",
            Self::Onestory => "Onestory",
            Self::Ktoon => "KTOON",
            Self::Bufftoon => "Bufftoon",
        }
    }

    pub fn all() -> &'static [Platform] {
        ALL_PLATFORMS
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when an acronym is not in the platform table.
#[derive(Debug, Clone)]
pub struct PlatformParseError(pub String);

impl std::fmt::Display for PlatformParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown platform acronym: '{}'", self.0)
    }
}

impl std::error::Error for PlatformParseError {}

impl std::str::FromStr for Platform {
    type Err = PlatformParseError;

    /// Parse a platform from its exact acronym.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_PLATFORMS
            .iter()
            .copied()
            .find(|platform| platform.acronym() == s)
            .ok_or_else(|| PlatformParseError(s.to_string()))
    }
}

/// Map an acronym to its display name, passing unknown acronyms through.
pub fn resolve_platform(acronym: &str) -> String {
    match acronym.parse::<Platform>() {
        Ok(platform) => platform.display_name().to_string(),
        Err(_) => acronym.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
