//! toonlist CLI
//!
//! Catalogs webtoon archives in a directory and exports the list to a
//! spreadsheet.

mod commands;
mod error;
mod logging;
mod progress;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub(crate) use error::CliError;

#[derive(Parser)]
#[command(name = "toonlist")]
#[command(about = "Catalog webtoon archives and export the list to a spreadsheet", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Running without a subcommand scans, same as `toonlist scan`
    #[command(flatten)]
    scan: ScanArgs,
}

/// Arguments for scanning a library and exporting it.
#[derive(Args, Clone)]
pub(crate) struct ScanArgs {
    /// Directory containing webtoon archives (defaults to the saved library
    /// root, then the current directory)
    pub(crate) path: Option<PathBuf>,

    /// Directory to write the spreadsheet to (defaults to the library)
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Print the catalog without writing a spreadsheet
    #[arg(short = 'n', long)]
    pub(crate) dry_run: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a directory and export the webtoon list
    Scan(ScanArgs),

    /// List known platform acronyms and archive formats
    Platforms,

    /// Manage saved settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the settings file
    Show,

    /// Print the settings file path
    Path,

    /// Save the default library directory
    SetRoot {
        /// Library directory (defaults to the current directory)
        path: Option<PathBuf>,
    },

    /// Forget the default library directory
    ClearRoot,
}

fn main() {
    let cli = Cli::parse();
    let bars = logging::init(cli.verbose, cli.quiet);

    let result = match cli.command.unwrap_or(Commands::Scan(cli.scan)) {
        Commands::Scan(args) => commands::scan::run_scan(args, &bars),
        Commands::Platforms => {
            commands::platforms::run_platforms();
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show();
                Ok(())
            }
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::SetRoot { path } => commands::config::run_config_set_root(path),
            ConfigAction::ClearRoot => commands::config::run_config_clear_root(),
        },
    };

    if let Err(e) = result {
        log::error!("toonlist failed: {}", e);
        std::process::exit(1);
    }
}
