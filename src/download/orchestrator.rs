//! Per-track download orchestration

use crate::config::Settings;
use crate::core::resolver::Resolver;
use crate::core::track::{OutputTarget, Track, TrackOutcome};
use crate::download::engine::{AudioEngine, EngineRequest};
use crate::platform::search::WebSearch;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Drives one track from output check to finished audio file
pub struct Orchestrator<S, E> {
    resolver: Resolver<S>,
    engine: E,
    output_dir: PathBuf,
    codec: String,
    quality: String,
    track_delay: Duration,
}

impl<S: WebSearch, E: AudioEngine> Orchestrator<S, E> {
    /// Create an orchestrator writing into `output_dir`
    pub fn new(resolver: Resolver<S>, engine: E, output_dir: impl Into<PathBuf>, settings: &Settings) -> Self {
        Self {
            resolver,
            engine,
            output_dir: output_dir.into(),
            codec: settings.audio_codec.clone(),
            quality: settings.audio_quality.clone(),
            track_delay: settings.track_delay,
        }
    }

    /// Search attempts the resolver makes per track
    pub fn search_attempts(&self) -> u32 {
        self.resolver.max_attempts()
    }

    /// Output target for a track
    pub fn target(&self, track: &Track) -> OutputTarget {
        OutputTarget::for_track(&self.output_dir, track, &self.codec)
    }

    /// Process one track, then pause for the fixed per-track delay.
    ///
    /// `on_start` runs once the track is known to need work, after the
    /// existing-file check and before the first search.
    pub async fn process(&self, track: &Track, on_start: impl FnOnce()) -> TrackOutcome {
        let outcome = self.process_track(track, on_start).await;

        if !self.track_delay.is_zero() {
            tokio::time::sleep(self.track_delay).await;
        }
        outcome
    }

    async fn process_track(&self, track: &Track, on_start: impl FnOnce()) -> TrackOutcome {
        let target = self.target(track);

        if target.exists() {
            debug!("Already on disk: {}", target.path().display());
            return TrackOutcome::Skipped(target.path());
        }
        on_start();

        let Some(url) = self.resolver.resolve(track).await else {
            return TrackOutcome::NotFound;
        };

        let request = EngineRequest {
            url,
            output_template: target.template(),
            codec: self.codec.clone(),
            quality: self.quality.clone(),
        };

        match self.engine.fetch_audio(&request).await {
            Ok(()) => {
                info!("Downloaded {} to {}", track, target.path().display());
                TrackOutcome::Downloaded(target.path())
            }
            Err(e) => {
                warn!("Download failed for {}: {}", track, e);
                TrackOutcome::Failed(e.to_string())
            }
        }
    }
}
