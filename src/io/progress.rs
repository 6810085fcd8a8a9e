//! Progress display while a patch is grown

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::metatile::MetatileSet;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static GENERATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Generation {{pos}}/{{len}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar counting completed expansions
pub struct GenerationProgress {
    bar: ProgressBar,
}

impl GenerationProgress {
    /// Create a bar for `generations` expansions
    pub fn new(generations: usize) -> Self {
        let bar = ProgressBar::new(generations as u64);
        bar.set_style(GENERATION_STYLE.clone());
        Self { bar }
    }

    /// Bar that never draws, for quiet runs and tests
    pub fn hidden(generations: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(generations as u64);
        Self { bar }
    }

    /// Record a finished generation
    pub fn record(&self, set: &MetatileSet) {
        self.bar.set_message(format!("{} metatiles", set.len()));
        self.bar.inc(1);
    }

    /// Number of generations recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
