//! # dzyt - Deezer playlist to MP3 via YouTube
//!
//! Reads the track list of a public Deezer playlist, finds a YouTube video
//! for every track through Brave web search and hands it to yt-dlp for
//! audio extraction.
//!
//! ## Features
//!
//! - Paginated Deezer playlist fetching
//! - Search-based YouTube resolution with fixed-delay retries
//! - Skips tracks already present in the output directory
//! - Per-track failures never abort the run
//!
//! ## Example
//!
//! ```rust,no_run
//! use dzyt::{cli::OutputFormatter, Pipeline, Settings};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() {
//!     let pipeline = Pipeline::new(Settings::from_env());
//!     let summary = pipeline
//!         .execute(
//!             "https://www.deezer.com/us/playlist/12345",
//!             Path::new("./music"),
//!             &OutputFormatter::new(),
//!         )
//!         .await;
//!
//!     if let Some(summary) = summary {
//!         println!("{} downloaded", summary.downloaded);
//!     }
//! }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod download;
pub mod error;
pub mod platform;
pub mod utils;

#[cfg(test)]
mod test_support;

// Re-export main types
pub use crate::config::Settings;
pub use crate::core::{Pipeline, PlaylistReference, RunSummary, Track, TrackOutcome};
pub use crate::error::DzytError;

/// Result type alias for dzyt operations
pub type Result<T> = std::result::Result<T, DzytError>;
