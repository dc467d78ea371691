//! Deezer playlist references

use crate::error::DzytError;
use crate::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static PLAYLIST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[/.])deezer\.com/([a-z]{2})/playlist/(\d+)").expect("playlist pattern is valid")
});

/// Playlist identifier extracted from a Deezer playlist URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistReference {
    /// Two-letter locale segment (e.g. `us`, `fr`)
    pub locale: String,
    /// Numeric playlist id, kept as text
    pub id: String,
}

impl PlaylistReference {
    /// Parse a playlist URL of the form `.../deezer.com/<xx>/playlist/<digits>`
    pub fn parse(url: &str) -> Result<Self> {
        let captures = PLAYLIST_PATTERN
            .captures(url.trim())
            .ok_or_else(|| DzytError::InvalidPlaylistUrl(url.to_string()))?;

        Ok(Self {
            locale: captures[1].to_string(),
            id: captures[2].to_string(),
        })
    }
}

impl fmt::Display for PlaylistReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
