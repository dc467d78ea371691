//! Playlist run: parse, fetch, then resolve and download track by track

use crate::cli::output::OutputFormatter;
use crate::config::Settings;
use crate::core::playlist::PlaylistReference;
use crate::core::resolver::Resolver;
use crate::core::track::TrackOutcome;
use crate::download::engine::{AudioEngine, YtDlpEngine};
use crate::download::orchestrator::Orchestrator;
use crate::error::DzytError;
use crate::Result;
use crate::platform::catalog::CatalogClient;
use crate::platform::client::{HttpClient, HttpClientConfig};
use crate::platform::search::BraveSearch;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Outcome counts of a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub downloaded: usize,
    pub skipped: usize,
    pub not_found: usize,
    pub failed: usize,
    pub elapsed: Duration,
}

impl RunSummary {
    fn record(&mut self, outcome: &TrackOutcome) {
        match outcome {
            TrackOutcome::Downloaded(_) => self.downloaded += 1,
            TrackOutcome::Skipped(_) => self.skipped += 1,
            TrackOutcome::NotFound => self.not_found += 1,
            TrackOutcome::Failed(_) => self.failed += 1,
        }
    }
}

/// Top-level playlist pipeline
pub struct Pipeline<E> {
    settings: Settings,
    engine: E,
}

impl Pipeline<YtDlpEngine> {
    /// Create a pipeline using yt-dlp as configured in `settings`
    pub fn new(settings: Settings) -> Self {
        let engine = YtDlpEngine::new(settings.ytdlp_program.clone());
        Self::with_engine(settings, engine)
    }
}

impl<E: AudioEngine> Pipeline<E> {
    /// Create a pipeline with a custom engine
    pub fn with_engine(settings: Settings, engine: E) -> Self {
        Self { settings, engine }
    }

    /// Run and report: fatal errors and the summary go to `formatter`
    pub async fn execute(
        self,
        playlist_url: &str,
        output_dir: &Path,
        formatter: &OutputFormatter,
    ) -> Option<RunSummary> {
        match self.run(playlist_url, output_dir, formatter).await {
            Ok(summary) => {
                formatter.print_summary(&summary);
                Some(summary)
            }
            Err(e) => {
                formatter.print_fatal(&e);
                None
            }
        }
    }

    /// Run the whole playlist.
    ///
    /// Only startup conditions are errors; per-track failures end up in the
    /// summary.
    pub async fn run(
        self,
        playlist_url: &str,
        output_dir: &Path,
        formatter: &OutputFormatter,
    ) -> Result<RunSummary> {
        let start_time = Instant::now();

        let playlist = PlaylistReference::parse(playlist_url)?;
        self.settings.require_api_key()?;
        std::fs::create_dir_all(output_dir)?;
        info!("Processing playlist {} into {}", playlist, output_dir.display());

        let http_client = HttpClient::with_config(HttpClientConfig {
            timeout: self.settings.http_timeout,
            ..HttpClientConfig::default()
        })?;

        formatter.print_fetching(&playlist);
        let catalog = CatalogClient::new(http_client.clone(), &self.settings);
        let tracks = catalog.fetch_tracks(&playlist).await;
        if tracks.is_empty() {
            return Err(DzytError::EmptyPlaylist);
        }
        formatter.print_track_count(tracks.len());

        let search = BraveSearch::new(http_client, &self.settings)?;
        let resolver = Resolver::new(search, &self.settings);
        let orchestrator = Orchestrator::new(resolver, self.engine, output_dir, &self.settings);
        let attempts = orchestrator.search_attempts();

        let mut summary = RunSummary {
            total: tracks.len(),
            ..RunSummary::default()
        };

        let total = tracks.len();
        for (index, track) in tracks.iter().enumerate() {
            let outcome = orchestrator
                .process(track, || formatter.print_track_start(index, total, track))
                .await;
            formatter.print_track_outcome(index, total, &outcome, attempts);
            summary.record(&outcome);
        }

        summary.elapsed = start_time.elapsed();
        info!("Run finished: {:?}", summary);
        Ok(summary)
    }
}
