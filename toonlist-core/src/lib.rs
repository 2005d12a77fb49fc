//! Filename grammar, platform table and record types for webtoon archives.
//!
//! Everything in this crate is pure: no filesystem access and no logging.
//! `toonlist-lib` drives these pieces from a directory scan.

pub mod classify;
pub mod error;
pub mod format;
pub mod platform;
pub mod util;
pub mod webtoon;

pub use classify::{ClassifiedName, classify};
pub use error::ClassifyError;
pub use format::{CompressionFormat, is_eligible_archive};
pub use platform::{Platform, PlatformParseError, resolve_platform};
pub use webtoon::{BuildOutcome, Webtoon, WebtoonFields};
