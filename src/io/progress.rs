//! Progress display for batch board generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Boards: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many boards of a batch have been written
///
/// Keeps its own counters so callers can report totals even when the bar is
/// hidden.
pub struct ProgressManager {
    bar: ProgressBar,
    total: usize,
    completed: usize,
    solved_on_creation: usize,
}

impl ProgressManager {
    /// Create a visible progress bar for `total` boards
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self::with_bar(bar, total)
    }

    /// Create a manager that tracks counts without drawing anything
    pub fn hidden(total: usize) -> Self {
        Self::with_bar(ProgressBar::hidden(), total)
    }

    fn with_bar(bar: ProgressBar, total: usize) -> Self {
        Self {
            bar,
            total,
            completed: 0,
            solved_on_creation: 0,
        }
    }

    /// Record a written board
    ///
    /// `already_solved` flags boards whose scrambling happened to leave start
    /// and end joined.
    pub fn complete_board(&mut self, name: &str, already_solved: bool) {
        self.completed += 1;
        if already_solved {
            self.solved_on_creation += 1;
        }
        self.bar.set_message(name.to_string());
        self.bar.inc(1);
    }

    /// Boards recorded so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Boards in the batch
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Boards that were solved straight out of the generator
    pub const fn solved_on_creation(&self) -> usize {
        self.solved_on_creation
    }

    /// Close the bar with a summary message
    pub fn finish(&self) {
        self.bar.finish_with_message(format!(
            "{} boards written ({} already solved)",
            self.completed, self.solved_on_creation
        ));
    }
}
