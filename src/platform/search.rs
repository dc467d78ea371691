//! Web search backends used to find a video for a track

use crate::config::Settings;
use crate::Result;
use crate::platform::client::HttpClient;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// A text search service returning ranked result URLs
#[async_trait]
pub trait WebSearch: Send + Sync {
    /// Run one search and return result URLs in ranked order
    async fn search(&self, query: &str) -> Result<Vec<String>>;
}

#[async_trait]
impl<T: WebSearch + ?Sized> WebSearch for std::sync::Arc<T> {
    async fn search(&self, query: &str) -> Result<Vec<String>> {
        self.as_ref().search(query).await
    }
}

/// Brave Search web API client
pub struct BraveSearch {
    http_client: HttpClient,
    endpoint: String,
    api_key: String,
    site: String,
    count: u32,
}

impl BraveSearch {
    /// Create a client; the API key is required
    pub fn new(http_client: HttpClient, settings: &Settings) -> Result<Self> {
        Ok(Self {
            http_client,
            endpoint: settings.search_endpoint.clone(),
            api_key: settings.require_api_key()?.to_string(),
            site: settings.search_site.clone(),
            count: settings.search_count,
        })
    }

    /// Query text with the site restriction appended
    pub fn site_query(&self, query: &str) -> String {
        format!("{} site:{}", query, self.site)
    }
}

#[async_trait]
impl WebSearch for BraveSearch {
    async fn search(&self, query: &str) -> Result<Vec<String>> {
        let q = self.site_query(query);
        debug!("Brave search: {}", q);

        let count = self.count.to_string();
        let request = self
            .http_client
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .header("X-Subscription-Token", &self.api_key)
            .query(&[("q", q.as_str()), ("count", count.as_str())]);

        let response: SearchResponse = self.http_client.fetch_json(request).await?;
        Ok(response.urls())
    }
}

/// Search response; only the web results are read
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub web: Option<WebResults>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebResults {
    #[serde(default)]
    pub results: Vec<WebResult>,
}

#[derive(Debug, Deserialize)]
pub struct WebResult {
    #[serde(default)]
    pub url: String,
}

impl SearchResponse {
    /// Result URLs in ranked order
    pub fn urls(self) -> Vec<String> {
        self.web
            .map(|web| web.results.into_iter().map(|r| r.url).collect())
            .unwrap_or_default()
    }
}
