use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use toonlist_lib::{CompressionFormat, Platform};

pub(crate) fn run_platforms() {
    log::info!("{}", "Platforms:".if_supports_color(Stdout, |t| t.bold()));
    for platform in Platform::all() {
        log::info!(
            "  {} {}",
            format!("{:<4}", platform.acronym()).if_supports_color(Stdout, |t| t.bold()),
            platform
                .display_name()
                .if_supports_color(Stdout, |t| t.cyan()),
        );
    }
    log::info!("  Unknown acronyms are listed as written.");

    crate::logging::blank();
    let extensions: Vec<&str> = CompressionFormat::all()
        .iter()
        .map(|f| f.extension())
        .collect();
    log::info!(
        "{} {}",
        "Archive formats:".if_supports_color(Stdout, |t| t.bold()),
        extensions.join(", "),
    );
}
