//! Command line argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Download a Deezer playlist as MP3 files found on YouTube
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Deezer playlist URL (e.g. https://www.deezer.com/us/playlist/12345)
    #[arg(value_name = "PLAYLIST_URL")]
    pub playlist_url: String,

    /// Directory the audio files are written to (created if missing)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,
}
