//! Stage progress reporting for the collage pipeline

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Prints one line per pipeline stage behind a live spinner
///
/// The pipeline has a handful of sequential stages rather than a long
/// iteration count, so a single spinner with stage messages replaces a
/// per-item bar. Disabled entirely in quiet mode.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter; a disabled reporter swallows all output
    pub fn new(enabled: bool) -> Self {
        let bar = enabled.then(|| {
            let bar = ProgressBar::new_spinner();
            bar.set_style(STAGE_STYLE.clone());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        });
        Self { bar }
    }

    /// Announce the start of a pipeline stage
    pub fn stage(&self, message: &str) {
        if let Some(ref bar) = self.bar {
            bar.println(format!("  -> {message}"));
            bar.set_message(message.to_string());
        }
    }

    /// Clear the spinner and print a closing line
    pub fn finish(&self, message: &str) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
            bar.println(format!("  -> {message}"));
        }
    }
}
