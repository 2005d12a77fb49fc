//! Progress bar for a library scan.
//!
//! Draws ` |█████     | NA_Title - Author.zip... (3/10)` and is driven
//! entirely by [`ScanProgress`] events from the scanner.

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use toonlist_lib::ScanProgress;

const BAR_TEMPLATE: &str = " |{bar:50.green/white}| {msg}... ({pos}/{len})";

pub(crate) struct ScanBar {
    bars: MultiProgress,
    pb: Option<ProgressBar>,
}

impl ScanBar {
    /// Draws into `bars`, which the logger suspends around each record.
    pub(crate) fn new(bars: &MultiProgress) -> Self {
        Self {
            bars: bars.clone(),
            pb: None,
        }
    }

    pub(crate) fn update(&mut self, progress: ScanProgress) {
        match progress {
            ScanProgress::Started { total } => {
                let pb = self.bars.add(ProgressBar::new(total as u64));
                pb.set_style(
                    ProgressStyle::with_template(BAR_TEMPLATE)
                        .expect("static pattern")
                        .progress_chars("█ "),
                );
                self.pb = Some(pb);
            }
            ScanProgress::Entry { index, name } => {
                if let Some(pb) = &self.pb {
                    pb.set_position(index as u64 + 1);
                    pb.set_message(name);
                }
            }
            ScanProgress::Finished { .. } => {
                if let Some(pb) = self.pb.take() {
                    pb.finish_and_clear();
                    self.bars.remove(&pb);
                }
            }
        }
    }
}
