//! User settings: default library directory and export directory.
//!
//! Stored as TOML in the user's config directory:
//! ```toml
//! [library]
//! current_root = "/path/to/webtoons"
//!
//! [export]
//! output_dir = "/path/to/exports"
//! ```

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_root: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Settings {
    /// Read settings from `path`. A missing or unparseable file yields
    /// defaults, with a warning for the latter.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring invalid settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let serialized = toml::to_string_pretty(self).map_err(io::Error::other)?;
        std::fs::write(path, serialized)
    }

    /// Saved library root, ignoring an empty string.
    fn library_root(&self) -> Option<PathBuf> {
        non_empty(self.library.current_root.as_deref())
    }

    fn output_dir(&self) -> Option<PathBuf> {
        non_empty(self.export.output_dir.as_deref())
    }

    /// Directory to scan: CLI override, then the saved root, then the
    /// current directory.
    pub fn library_path(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.library_root())
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Export directory: CLI override, then the saved directory, then the
    /// library itself.
    pub fn export_dir(&self, cli_override: Option<PathBuf>, library: &Path) -> PathBuf {
        cli_override
            .or_else(|| self.output_dir())
            .unwrap_or_else(|| library.to_path_buf())
    }
}

fn non_empty(path: Option<&Path>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

/// `~/.config/toonlist/settings.toml`, or `./toonlist/settings.toml` when
/// the platform has no config directory.
pub fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toonlist")
        .join("settings.toml")
}

pub fn resolve_library_path(cli_override: Option<PathBuf>) -> PathBuf {
    Settings::load().library_path(cli_override)
}

pub fn resolve_output_dir(cli_override: Option<PathBuf>, library: &Path) -> PathBuf {
    Settings::load().export_dir(cli_override, library)
}

/// Save (or clear) the default library root, keeping the export settings.
pub fn save_library_path(root: Option<&Path>) -> io::Result<()> {
    let path = settings_path();
    let mut settings = Settings::load_from(&path);
    settings.library.current_root = root.map(Path::to_path_buf);
    settings.save_to(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("settings.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn cli_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "[library]\ncurrent_root = \"/saved\"\n");
        let settings = Settings::load_from(&path);

        assert_eq!(
            settings.library_path(Some(PathBuf::from("/cli"))),
            PathBuf::from("/cli")
        );
        assert_eq!(settings.library_path(None), PathBuf::from("/saved"));
    }

    #[test]
    fn missing_file_falls_back_to_current_dir() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("missing.toml"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.library_path(None), std::env::current_dir().unwrap());
    }

    #[test]
    fn empty_root_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "[library]\ncurrent_root = \"\"\n");
        let settings = Settings::load_from(&path);
        assert_eq!(settings.library_path(None), std::env::current_dir().unwrap());
    }

    #[test]
    fn invalid_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "library = 3\n");
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn export_dir_falls_back_to_library() {
        let dir = tempfile::tempdir().unwrap();
        let library = Path::new("/webtoons");

        let settings = Settings::load_from(&dir.path().join("missing.toml"));
        assert_eq!(settings.export_dir(None, library), PathBuf::from("/webtoons"));

        let path = write(dir.path(), "[export]\noutput_dir = \"/exports\"\n");
        let settings = Settings::load_from(&path);
        assert_eq!(settings.export_dir(None, library), PathBuf::from("/exports"));
        assert_eq!(
            settings.export_dir(Some(PathBuf::from("/cli")), library),
            PathBuf::from("/cli")
        );
    }

    #[test]
    fn save_and_reload_keeps_both_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut settings = Settings::default();
        settings.export.output_dir = Some(PathBuf::from("/exports"));
        settings.library.current_root = Some(PathBuf::from("/lib"));
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);

        settings.library.current_root = None;
        settings.save_to(&path).unwrap();
        let reloaded = Settings::load_from(&path);
        assert_eq!(reloaded.library.current_root, None);
        assert_eq!(reloaded.export.output_dir, Some(PathBuf::from("/exports")));
    }
}
