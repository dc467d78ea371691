//! Run settings for dzyt

use crate::error::DzytError;
use crate::Result;
use std::time::Duration;

/// Environment variable holding the Brave Search subscription token
pub const API_KEY_VAR: &str = "BRAVE_API_KEY";

/// Environment variable overriding the downloader binary
pub const YTDLP_VAR: &str = "DZYT_YTDLP";

/// Settings shared by the catalog fetcher, resolver and orchestrator
#[derive(Debug, Clone)]
pub struct Settings {
    /// Catalog API base URL
    pub catalog_base_url: String,
    /// Web search endpoint
    pub search_endpoint: String,
    /// Search API key
    pub api_key: Option<String>,
    /// Site restriction appended to every search query
    pub search_site: String,
    /// Number of search results requested
    pub search_count: u32,
    /// Substring a result URL must contain to count as a watch page
    pub watch_pattern: String,
    /// Search attempts per track
    pub search_attempts: u32,
    /// Delay between search attempts
    pub search_retry_delay: Duration,
    /// Delay between catalog page requests
    pub page_delay: Duration,
    /// Delay after each processed track
    pub track_delay: Duration,
    /// HTTP timeout
    pub http_timeout: Duration,
    /// Downloader binary
    pub ytdlp_program: String,
    /// Output audio codec (also the file extension)
    pub audio_codec: String,
    /// Output audio quality in kbps
    pub audio_quality: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_base_url: "https://api.deezer.com".to_string(),
            search_endpoint: "https://api.search.brave.com/res/v1/web/search".to_string(),
            api_key: None,
            search_site: "youtube.com".to_string(),
            search_count: 3,
            watch_pattern: "youtube.com/watch".to_string(),
            search_attempts: 3,
            search_retry_delay: Duration::from_secs(1),
            page_delay: Duration::from_millis(500),
            track_delay: Duration::from_secs(1),
            http_timeout: Duration::from_secs(30),
            ytdlp_program: "yt-dlp".to_string(),
            audio_codec: "mp3".to_string(),
            audio_quality: "192".to_string(),
        }
    }
}

impl Settings {
    /// Build settings from defaults plus the process environment
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        settings.api_key = std::env::var(API_KEY_VAR).ok();
        if let Ok(program) = std::env::var(YTDLP_VAR) {
            if !program.trim().is_empty() {
                settings.ytdlp_program = program;
            }
        }
        settings
    }

    /// Set API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set catalog base URL
    pub fn with_catalog_base_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_base_url = url.into();
        self
    }

    /// Set search endpoint
    pub fn with_search_endpoint(mut self, url: impl Into<String>) -> Self {
        self.search_endpoint = url.into();
        self
    }

    /// Drop every fixed pause (page, retry and per-track delays)
    pub fn without_delays(mut self) -> Self {
        self.page_delay = Duration::ZERO;
        self.search_retry_delay = Duration::ZERO;
        self.track_delay = Duration::ZERO;
        self
    }

    /// Return the API key, rejecting a missing or blank value
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(DzytError::MissingApiKey(API_KEY_VAR))
    }
}
