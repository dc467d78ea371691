//! Track model, output targets and per-track outcomes

use crate::utils::track_file_stem;
use std::fmt;
use std::path::{Path, PathBuf};

/// A playlist track as reported by the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Artist name
    pub artist: String,
    /// Track title
    pub title: String,
    /// Catalog identifier
    pub source_id: String,
}

impl Track {
    /// Create a new track
    pub fn new(artist: impl Into<String>, title: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
            source_id: source_id.into(),
        }
    }

    /// Free-text search query for this track
    pub fn query(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.artist, self.title)
    }
}

/// Local file a track is written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    directory: PathBuf,
    stem: String,
    extension: String,
}

impl OutputTarget {
    /// Compute the target for a track inside `directory`
    pub fn for_track(directory: &Path, track: &Track, extension: &str) -> Self {
        Self {
            directory: directory.to_path_buf(),
            stem: track_file_stem(&track.artist, &track.title),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// `"<artist> - <title>.<ext>"`
    pub fn filename(&self) -> String {
        format!("{}.{}", self.stem, self.extension)
    }

    /// Full path of the final audio file
    pub fn path(&self) -> PathBuf {
        self.directory.join(self.filename())
    }

    /// Output template handed to the engine; it picks the extension itself
    pub fn template(&self) -> PathBuf {
        self.directory.join(format!("{}.%(ext)s", self.stem))
    }

    /// Check if the final audio file is already on disk
    pub fn exists(&self) -> bool {
        self.path().exists()
    }
}

/// Result of processing one track
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackOutcome {
    /// Engine wrote the file
    Downloaded(PathBuf),
    /// File already present, nothing done
    Skipped(PathBuf),
    /// No matching video after every search attempt
    NotFound,
    /// Engine invocation failed
    Failed(String),
}
