//! Deezer catalog client: paginated playlist track listing

use crate::config::Settings;
use crate::core::{PlaylistReference, Track};
use crate::Result;
use crate::platform::client::HttpClient;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info};
use url::Url;

/// Catalog API client
pub struct CatalogClient {
    http_client: HttpClient,
    base_url: String,
    page_delay: Duration,
}

impl CatalogClient {
    /// Create a new catalog client from settings
    pub fn new(http_client: HttpClient, settings: &Settings) -> Self {
        Self {
            http_client,
            base_url: settings.catalog_base_url.trim_end_matches('/').to_string(),
            page_delay: settings.page_delay,
        }
    }

    /// URL of the first track page of a playlist
    pub fn first_page_url(&self, playlist: &PlaylistReference) -> String {
        format!("{}/playlist/{}/tracks", self.base_url, playlist.id)
    }

    /// Fetch every track of a playlist, following `next` links.
    ///
    /// A failing page stops the walk; tracks gathered up to that point are
    /// returned.
    pub async fn fetch_tracks(&self, playlist: &PlaylistReference) -> Vec<Track> {
        let mut tracks = Vec::new();
        let mut next_url = Some(self.first_page_url(playlist));
        let mut page_number = 0u32;

        while let Some(url) = next_url.take() {
            if page_number > 0 && !self.page_delay.is_zero() {
                tokio::time::sleep(self.page_delay).await;
            }
            page_number += 1;

            debug!("Fetching catalog page {}: {}", page_number, url);
            match self.fetch_page(&url).await {
                Ok(page) => {
                    debug!("Page {} returned {} tracks", page_number, page.data.len());
                    tracks.extend(page.data.into_iter().map(Track::from));
                    next_url = page.next;
                }
                Err(e) => {
                    error!("Error fetching Deezer tracks: {}", e);
                    break;
                }
            }
        }

        info!(
            "Fetched {} tracks from playlist {} in {} page(s)",
            tracks.len(),
            playlist,
            page_number
        );
        tracks
    }

    async fn fetch_page(&self, url: &str) -> Result<TrackPage> {
        let url = Url::parse(url)?;
        self.http_client.fetch_json(self.http_client.get(url.as_str())).await
    }
}

/// One page of the playlist track listing
#[derive(Debug, Deserialize)]
pub struct TrackPage {
    pub data: Vec<TrackData>,
    #[serde(default)]
    pub next: Option<String>,
}

/// Track record as returned by the catalog
#[derive(Debug, Deserialize)]
pub struct TrackData {
    pub id: serde_json::Value,
    pub title: String,
    pub artist: ArtistData,
}

#[derive(Debug, Deserialize)]
pub struct ArtistData {
    pub name: String,
}

impl From<TrackData> for Track {
    fn from(data: TrackData) -> Self {
        let source_id = match data.id {
            serde_json::Value::String(id) => id,
            other => other.to_string(),
        };
        Track::new(data.artist.name, data.title, source_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_body(tracks: &[(u64, &str, &str)], next: Option<&str>) -> String {
        let data: Vec<serde_json::Value> = tracks
            .iter()
            .map(|(id, artist, title)| {
                serde_json::json!({
                    "id": id,
                    "title": title,
                    "duration": 200,
                    "artist": { "id": 1, "name": artist },
                    "album": { "title": "Album" }
                })
            })
            .collect();
        let mut body = serde_json::json!({ "data": data, "total": 42 });
        if let Some(next) = next {
            body["next"] = serde_json::Value::String(next.to_string());
        }
        body.to_string()
    }

    fn client_for(server: &mockito::ServerGuard) -> CatalogClient {
        let settings = Settings::default()
            .with_catalog_base_url(server.url())
            .without_delays();
        CatalogClient::new(HttpClient::new().unwrap(), &settings)
    }

    fn playlist() -> PlaylistReference {
        PlaylistReference::parse("https://www.deezer.com/us/playlist/12345").unwrap()
    }

    #[test]
    fn test_track_data_deserialization() {
        let json = r#"{"id": 3135556, "title": "Harder, Better, Faster, Stronger",
                       "artist": {"id": 27, "name": "Daft Punk"}, "rank": 900000}"#;
        let data: TrackData = serde_json::from_str(json).unwrap();
        let track = Track::from(data);
        assert_eq!(track.artist, "Daft Punk");
        assert_eq!(track.title, "Harder, Better, Faster, Stronger");
        assert_eq!(track.source_id, "3135556");
    }

    #[test]
    fn test_page_without_next() {
        let page: TrackPage = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(page.data.is_empty());
        assert!(page.next.is_none());
    }

    #[tokio::test]
    async fn test_fetch_tracks_follows_pages() {
        let mut server = mockito::Server::new_async().await;
        let page2_url = format!("{}/playlist/12345/tracks?index=2", server.url());

        let first = server
            .mock("GET", "/playlist/12345/tracks")
            .match_query(mockito::Matcher::Missing)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(page_body(&[(1, "A", "X"), (2, "B", "Y")], Some(&page2_url)))
            .create_async()
            .await;
        let second = server
            .mock("GET", "/playlist/12345/tracks")
            .match_query(mockito::Matcher::UrlEncoded("index".into(), "2".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(page_body(&[(3, "C", "Z")], None))
            .create_async()
            .await;

        let tracks = client_for(&server).fetch_tracks(&playlist()).await;

        let titles: Vec<&str> = tracks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["X", "Y", "Z"]);
        assert_eq!(tracks[0].artist, "A");
        assert_eq!(tracks[2].source_id, "3");
        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_tracks_keeps_partial_results() {
        let mut server = mockito::Server::new_async().await;
        let page2_url = format!("{}/page2", server.url());

        server
            .mock("GET", "/playlist/12345/tracks")
            .with_status(200)
            .with_body(page_body(&[(1, "A", "X"), (2, "B", "Y")], Some(&page2_url)))
            .create_async()
            .await;
        let failing = server
            .mock("GET", "/page2")
            .with_status(500)
            .create_async()
            .await;

        let tracks = client_for(&server).fetch_tracks(&playlist()).await;

        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0], Track::new("A", "X", "1"));
        assert_eq!(tracks[1], Track::new("B", "Y", "2"));
        failing.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_tracks_malformed_page() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/playlist/12345/tracks")
            .with_status(200)
            .with_body(r#"{"error": {"type": "DataException", "code": 800}}"#)
            .create_async()
            .await;

        let tracks = client_for(&server).fetch_tracks(&playlist()).await;
        assert!(tracks.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_tracks_stops_on_unparsable_next() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/playlist/12345/tracks")
            .with_status(200)
            .with_body(page_body(&[(1, "A", "X")], Some("not a url")))
            .create_async()
            .await;

        let tracks = client_for(&server).fetch_tracks(&playlist()).await;
        assert_eq!(tracks, vec![Track::new("A", "X", "1")]);
    }

    fn client_with_page_delay(server: &mockito::ServerGuard, page_delay: Duration) -> CatalogClient {
        let mut settings = Settings::default()
            .with_catalog_base_url(server.url())
            .without_delays();
        settings.page_delay = page_delay;
        CatalogClient::new(HttpClient::new().unwrap(), &settings)
    }

    #[tokio::test]
    async fn test_page_delay_between_pages() {
        let mut server = mockito::Server::new_async().await;
        let page2_url = format!("{}/page2", server.url());
        server
            .mock("GET", "/playlist/12345/tracks")
            .with_status(200)
            .with_body(page_body(&[(1, "A", "X")], Some(&page2_url)))
            .create_async()
            .await;
        server
            .mock("GET", "/page2")
            .with_status(200)
            .with_body(page_body(&[(2, "B", "Y")], None))
            .create_async()
            .await;

        let client = client_with_page_delay(&server, Duration::from_millis(50));
        let start = std::time::Instant::now();
        let tracks = client.fetch_tracks(&playlist()).await;

        assert_eq!(tracks.len(), 2);
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_no_page_delay_for_single_page() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/playlist/12345/tracks")
            .with_status(200)
            .with_body(page_body(&[(1, "A", "X")], None))
            .create_async()
            .await;

        let client = client_with_page_delay(&server, Duration::from_secs(5));
        let start = std::time::Instant::now();
        let tracks = client.fetch_tracks(&playlist()).await;

        assert_eq!(tracks.len(), 1);
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_first_page_url() {
        let settings = Settings::default().with_catalog_base_url("https://api.example/");
        let client = CatalogClient::new(HttpClient::new().unwrap(), &settings);
        assert_eq!(
            client.first_page_url(&playlist()),
            "https://api.example/playlist/12345/tracks"
        );
    }
}
