//! Multi-script replay progress with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Replay state of one script in the rolling display
#[derive(Debug, Clone, Default)]
struct ScriptState {
    name: String,
    strokes_done: usize,
    stroke_count: usize,
}

/// Coordinates progress display while replaying stroke scripts
///
/// Small batches get one bar per script; larger batches add a single
/// overall bar and only show the most recent scripts individually.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    script_bars: Vec<ProgressBar>,
    scripts: Vec<ScriptState>,
    finished: bool,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static STROKE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Scripts: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            script_bars: Vec::new(),
            scripts: Vec::new(),
            finished: false,
        }
    }

    /// Initialize progress bars for the number of scripts to replay
    pub fn initialize(&mut self, script_count: usize) {
        // Batch mode keeps large directories from flooding the terminal
        if script_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(script_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..script_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let pb = ProgressBar::new(0);
            pb.set_style(STROKE_STYLE.clone());
            self.script_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Whether the overall batch bar is in use
    pub const fn is_batched(&self) -> bool {
        self.batch_bar.is_some()
    }

    /// Configure progress for a script about to be replayed
    pub fn start_file(&mut self, index: usize, path: &Path, stroke_count: usize) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.scripts.len() {
            self.scripts.resize(index + 1, ScriptState::default());
        }
        if let Some(state) = self.scripts.get_mut(index) {
            *state = ScriptState {
                name,
                strokes_done: 0,
                stroke_count,
            };
        }
        self.update_bars();
    }

    /// Report how many strokes of a script have been replayed
    pub fn update_strokes(&mut self, index: usize, strokes_done: usize) {
        if let Some(state) = self.scripts.get_mut(index) {
            state.strokes_done = strokes_done;
        }
        self.update_bars();
    }

    /// Mark a script as replayed and advance the batch bar
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.scripts.get_mut(index) {
            state.name = format!("✓ {}", state.name);
            state.strokes_done = state.stroke_count;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&mut self) {
        if self.finished {
            return;
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All scripts replayed");
        }
        let _ = self.multi_progress.clear();
        self.finished = true;
    }

    /// Whether the displays have been cleaned up
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Show the most recent scripts on the individual bars
    fn update_bars(&self) {
        let active: Vec<&ScriptState> = self
            .scripts
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();

        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar, state) in self.script_bars.iter().zip(visible) {
            bar.set_length(state.stroke_count as u64);
            bar.set_position(state.strokes_done as u64);
            let width = state.stroke_count.to_string().len();
            bar.set_message(format!(
                "{:>width$}/{}",
                state.strokes_done, state.stroke_count
            ));
            bar.set_prefix(state.name.clone());
        }

        for bar in self.script_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
