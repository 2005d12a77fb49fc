//! Logger setup.
//!
//! All output goes through `log`. Records are written while the progress
//! bars are suspended, so a warning during a scan lands on its own line
//! instead of splicing into the bar.

use std::io::Write;

use indicatif::MultiProgress;
use log::{LevelFilter, Log, Metadata, Record};

/// env_logger wrapped so each record clears and redraws the bars.
struct BarAwareLogger {
    inner: env_logger::Logger,
    bars: MultiProgress,
}

impl Log for BarAwareLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if self.inner.enabled(record.metadata()) {
            self.bars.suspend(|| self.inner.log(record));
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Info lines are printed bare so they read as normal command output;
/// `RUST_LOG` overrides the flag-derived level.
fn build_logger(verbose: bool, quiet: bool) -> env_logger::Logger {
    env_logger::Builder::new()
        .filter_level(level_for(verbose, quiet))
        .parse_default_env()
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(
                buf,
                "{}: {}",
                level.as_str().to_lowercase(),
                record.args()
            ),
        })
        .build()
}

/// Install the global logger and return the bar container that progress
/// displays must draw into.
pub(crate) fn init(verbose: bool, quiet: bool) -> MultiProgress {
    let bars = if quiet {
        MultiProgress::with_draw_target(indicatif::ProgressDrawTarget::hidden())
    } else {
        MultiProgress::new()
    };

    let inner = build_logger(verbose, quiet);
    let max_level = inner.filter();
    let logger = BarAwareLogger {
        inner,
        bars: bars.clone(),
    };
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(max_level);
    }
    bars
}

/// Print an empty line through the logger.
pub(crate) fn blank() {
    log::info!("");
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    fn logger(verbose: bool, quiet: bool) -> BarAwareLogger {
        BarAwareLogger {
            inner: build_logger(verbose, quiet),
            bars: MultiProgress::with_draw_target(indicatif::ProgressDrawTarget::hidden()),
        }
    }

    fn enabled(logger: &BarAwareLogger, level: Level) -> bool {
        logger.enabled(&Metadata::builder().level(level).target("toonlist").build())
    }

    #[test]
    fn flags_pick_the_level() {
        assert_eq!(level_for(false, false), LevelFilter::Info);
        assert_eq!(level_for(true, false), LevelFilter::Debug);
        assert_eq!(level_for(false, true), LevelFilter::Warn);
    }

    #[test]
    fn wrapper_filters_like_env_logger() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let quiet = logger(false, true);
        assert!(enabled(&quiet, Level::Warn));
        assert!(!enabled(&quiet, Level::Info));

        let verbose = logger(true, false);
        assert!(enabled(&verbose, Level::Debug));
        assert!(!enabled(&verbose, Level::Trace));
    }

    #[test]
    fn logging_with_an_active_bar_keeps_the_bar() {
        let logger = logger(false, false);
        let pb = logger.bars.add(indicatif::ProgressBar::new(3));
        pb.set_position(1);

        logger.log(
            &Record::builder()
                .level(Level::Warn)
                .target("toonlist")
                .args(format_args!("Skipping Broken.zip"))
                .build(),
        );

        assert_eq!(pb.position(), 1);
        assert!(!pb.is_finished());
    }
}
