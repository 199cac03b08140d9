//! Progress display for batch exports

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static EXPORT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Exports: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks one bar across every file a run writes
///
/// A hidden bar is used when progress is suppressed, so callers never branch.
pub struct ExportProgress {
    bar: ProgressBar,
}

impl ExportProgress {
    /// Visible bar over `total` exports
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(EXPORT_STYLE.clone());
        Self { bar }
    }

    /// Bar that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Show which file is being produced
    pub fn start(&self, filename: &str) {
        self.bar.set_message(filename.to_string());
    }

    /// Count one finished export
    pub fn complete(&self) {
        self.bar.inc(1);
    }

    /// Number of finished exports
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Leave the finished bar on screen
    pub fn finish(&self) {
        self.bar.finish_with_message("All exports written");
    }
}
