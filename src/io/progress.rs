//! Progress display for collapse runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static COLLAPSE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Cells: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for a single collapse run
///
/// Tracks collapsed cells against the grid's total and shows the current
/// iteration alongside. Construct with the cell count, then feed it state
/// once per iteration.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar sized to `cell_count`
    pub fn new(cell_count: usize) -> Self {
        let bar = ProgressBar::new(cell_count as u64);
        bar.set_style(COLLAPSE_STYLE.clone());
        Self { bar }
    }

    /// Report collapsed cells and the current iteration
    pub fn update(&self, collapsed: usize, iteration: usize) {
        self.bar.set_position(collapsed as u64);
        self.bar.set_message(format!("iteration {iteration}"));
    }

    /// Finish the bar with a closing message
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    /// Leave the bar in place when a run ends early
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}
