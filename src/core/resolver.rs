//! Track to video URL resolution

use crate::config::Settings;
use crate::core::track::Track;
use crate::download::retry::{RetryConfigBuilder, RetryExecutor};
use crate::platform::search::WebSearch;
use tracing::{debug, info, warn};

/// Resolves tracks to watch-page URLs through a web search backend
pub struct Resolver<S> {
    search: S,
    watch_pattern: String,
    retry: RetryExecutor,
}

impl<S: WebSearch> Resolver<S> {
    /// Create a resolver using the retry and pattern settings
    pub fn new(search: S, settings: &Settings) -> Self {
        Self {
            search,
            watch_pattern: settings.watch_pattern.clone(),
            retry: RetryExecutor::with_config(
                RetryConfigBuilder::new()
                    .max_attempts(settings.search_attempts)
                    .delay(settings.search_retry_delay)
                    .build(),
            ),
        }
    }

    /// Number of search attempts per track
    pub fn max_attempts(&self) -> u32 {
        self.retry.config().max_attempts
    }

    /// One search; errors are logged and count as no result
    pub async fn resolve_once(&self, query: &str) -> Option<String> {
        match self.search.search(query).await {
            Ok(urls) => {
                let found = urls.into_iter().find(|url| url.contains(&self.watch_pattern));
                if found.is_none() {
                    debug!("No watch page among results for: {}", query);
                }
                found
            }
            Err(e) => {
                warn!("Brave search failed: {}", e);
                None
            }
        }
    }

    /// Resolve a track, retrying the full search on a miss
    pub async fn resolve(&self, track: &Track) -> Option<String> {
        let query = track.query();
        let attempts = self.max_attempts();

        let resolved = self
            .retry
            .until_some(|attempt| {
                debug!("Search attempt {}/{} for: {}", attempt, attempts, query);
                self.resolve_once(&query)
            })
            .await;

        match &resolved {
            Some(url) => info!("Resolved '{}' to {}", query, url),
            None => warn!("Unresolved after {} attempts: {}", attempts, query),
        }
        resolved
    }
}
