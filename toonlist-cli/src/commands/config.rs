use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use toonlist_lib::settings::{self, Settings};

use crate::CliError;

/// Show the settings file and the directories it resolves to.
pub(crate) fn run_config_show() {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "toonlist Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::logging::blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let saved = Settings::load_from(&path);
    let library = saved.library_path(None);
    let output = saved.export_dir(None, &library);
    log::info!(
        "  Library:       {} {}",
        library.display(),
        source_label(saved.library.current_root.is_some()),
    );
    log::info!(
        "  Export to:     {} {}",
        output.display(),
        source_label(saved.export.output_dir.is_some()),
    );
}

fn source_label(saved: bool) -> String {
    let label = if saved { "(saved)" } else { "(default)" };
    label.if_supports_color(Stdout, |t| t.dimmed()).to_string()
}

pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

/// Save `path` (or the current directory) as the default library.
pub(crate) fn run_config_set_root(path: Option<PathBuf>) -> Result<(), CliError> {
    let root = match path {
        Some(p) => p,
        None => std::env::current_dir()?,
    };
    let root = root
        .canonicalize()
        .map_err(|e| CliError::config(format!("cannot use {}: {}", root.display(), e)))?;
    if !root.is_dir() {
        return Err(CliError::config(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    settings::save_library_path(Some(&root))?;
    log::info!(
        "Library root set to {}",
        root.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

pub(crate) fn run_config_clear_root() -> Result<(), CliError> {
    settings::save_library_path(None)?;
    log::info!("Library root cleared.");
    Ok(())
}
