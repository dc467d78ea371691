//! Error types for dzyt

use thiserror::Error;

/// Main error type for dzyt operations
#[derive(Debug, Error)]
pub enum DzytError {
    #[error("Invalid Deezer playlist URL: {0}")]
    InvalidPlaylistUrl(String),

    #[error("{0} environment variable not set")]
    MissingApiKey(&'static str),

    #[error("No tracks found in playlist")]
    EmptyPlaylist,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Engine error: {0}")]
    Engine(String),
}
