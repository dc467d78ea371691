//! Console output for a playlist run

use crate::core::pipeline::RunSummary;
use crate::core::{PlaylistReference, Track, TrackOutcome};
use crate::error::DzytError;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

/// Output formatter for dzyt
pub struct OutputFormatter {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl OutputFormatter {
    /// Create a formatter printing to stdout
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a formatter printing to any writer
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            sink: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, message: &str) {
        // A poisoned lock or closed stdout only loses console text
        if let Ok(mut sink) = self.sink.lock() {
            let _ = writeln!(sink, "{}", message);
            let _ = sink.flush();
        }
    }

    /// Print the catalog fetch start
    pub fn print_fetching(&self, playlist: &PlaylistReference) {
        self.line(&format!("Fetching tracks from Deezer playlist {}...", playlist));
    }

    /// Print the number of tracks about to be processed
    pub fn print_track_count(&self, count: usize) {
        self.line(&format!("Found {} tracks, starting downloads...", count));
    }

    /// Print the `[i/total]` header of a track
    pub fn print_track_start(&self, index: usize, total: usize, track: &Track) {
        self.line(&progress_line(index, total, track));
    }

    /// Print the outcome of a track
    pub fn print_track_outcome(&self, index: usize, total: usize, outcome: &TrackOutcome, search_attempts: u32) {
        self.line(&outcome_line(index, total, outcome, search_attempts));
    }

    /// Print a run-aborting error
    pub fn print_fatal(&self, error: &DzytError) {
        self.line(&format!("❌ {}", error));
    }

    /// Print the end-of-run counts
    pub fn print_summary(&self, summary: &RunSummary) {
        self.line(&format!(
            "✅ Done in {}: {} downloaded, {} skipped, {} not found, {} failed",
            format_duration(summary.elapsed),
            summary.downloaded,
            summary.skipped,
            summary.not_found,
            summary.failed
        ));
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// `[i/total] Processing: <artist> - <title>`, with a 0-based `index`
pub fn progress_line(index: usize, total: usize, track: &Track) -> String {
    format!("[{}/{}] Processing: {}", index + 1, total, track)
}

/// Outcome line of a track.
///
/// A skipped track gets a single `[i/total]` line; every other outcome is
/// indented under the `Processing` header.
pub fn outcome_line(index: usize, total: usize, outcome: &TrackOutcome, search_attempts: u32) -> String {
    match outcome {
        TrackOutcome::Skipped(path) => {
            format!("[{}/{}] Skipping existing: {}", index + 1, total, file_name(path))
        }
        TrackOutcome::Downloaded(path) => format!("  Downloaded: {}", file_name(path)),
        TrackOutcome::NotFound => format!(
            "  No YouTube video found after {} attempts",
            search_attempts
        ),
        TrackOutcome::Failed(reason) => format!("  Download failed: {}", reason),
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Format duration as human-readable string, whole seconds only
fn format_duration(duration: Duration) -> String {
    humantime::format_duration(Duration::from_secs(duration.as_secs())).to_string()
}
