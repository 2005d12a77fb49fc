use indicatif::MultiProgress;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use toonlist_lib::settings::{resolve_library_path, resolve_output_dir};
use toonlist_lib::util::{format_size, pluralize};
use toonlist_lib::{Catalog, ExportSummary, FsSource, export_catalog, scan_webtoons};

use crate::progress::ScanBar;
use crate::{CliError, ScanArgs};

/// Scan the library, print the catalog, and export it.
pub(crate) fn run_scan(args: ScanArgs, bars: &MultiProgress) -> Result<(), CliError> {
    let library = resolve_library_path(args.path);

    log::info!(
        "{}",
        format!("Scanning {}", library.display()).if_supports_color(Stdout, |t| t.bold()),
    );

    let mut bar = ScanBar::new(bars);
    let catalog = scan_webtoons(&FsSource, &library, &mut |p| bar.update(p))?;

    print_catalog(&catalog);

    if args.dry_run {
        log::info!("Dry run: no spreadsheet written.");
        return Ok(());
    }

    let output = resolve_output_dir(args.output, &library);
    let summary = export_catalog(
        &output,
        catalog.webtoons(),
        chrono::Local::now().naive_local(),
    )?;
    print_summary(&summary);

    crate::logging::blank();
    log::info!("toonlist is successfully done.");
    Ok(())
}

fn print_catalog(catalog: &Catalog) {
    let mut current_platform = None;

    for webtoon in catalog.webtoons() {
        if current_platform != Some(webtoon.platform()) {
            crate::logging::blank();
            log::info!(
                "{}:",
                webtoon.platform().if_supports_color(Stdout, |t| t.bold()),
            );
            current_platform = Some(webtoon.platform());
        }

        log::info!(
            "  {} - {}{} {}",
            webtoon.title().if_supports_color(Stdout, |t| t.cyan()),
            webtoon.authors().join(", "),
            if webtoon.completed() {
                format!(" {}", "(completed)".if_supports_color(Stdout, |t| t.green()))
            } else {
                String::new()
            },
            format!(
                "({}, {}, {})",
                webtoon.file_extension(),
                format_size(webtoon.size()),
                webtoon.creation_time()
            )
            .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    crate::logging::blank();
    log::info!(
        "{}",
        format!("Total {}", pluralize(catalog.len(), "webtoon"))
            .if_supports_color(Stdout, |t| t.bold()),
    );
    if catalog.skipped() > 0 {
        log::warn!(
            "{} skipped (see warnings above)",
            pluralize(catalog.skipped(), "archive")
        );
    }
}

fn print_summary(summary: &ExportSummary) {
    crate::logging::blank();
    match &summary.previous {
        Some(previous) => {
            log::info!(
                "Updated from {}",
                previous.display().if_supports_color(Stdout, |t| t.dimmed()),
            );
            log::info!(
                "  {} new, {} removed",
                summary.added.if_supports_color(Stdout, |t| t.green()),
                summary.removed.if_supports_color(Stdout, |t| t.red()),
            );
        }
        None => log::info!("Created a new webtoon list"),
    }
    log::info!(
        "  Wrote {} to {}",
        pluralize(summary.total, "row"),
        summary.path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
}
