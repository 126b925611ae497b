//! TMDB-backed metadata provider.
//!
//! Thin read-only client over three TMDB v3 endpoints: movie search and
//! horror discovery, movie detail with appended videos, and per-region
//! watch providers. Wire shapes are parsed into the core domain types
//! here; nothing upstream-specific leaks past this module.

use async_trait::async_trait;
use serde::Deserialize;
use shriek_core::config::TmdbConfig;
use shriek_core::types::{Genre, MovieRecord, MovieSummary, RegionOffers, Video, WatchProviderTable};
use url::Url;

use crate::errors::MetadataError;
use crate::provider::MetadataProvider;

/// TMDB genre id for horror, used by the landing-page browse.
const HORROR_GENRE_ID: &str = "27";

/// TMDB HTTP client.
///
/// Holds the credential injected at construction; a missing credential is
/// rejected up front so every dependent fetch short-circuits on one typed
/// configuration error instead of failing per call.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl TmdbClient {
    /// Creates a client from TMDB configuration.
    ///
    /// # Errors
    ///
    /// - `MetadataError::Configuration` - The API credential is absent.
    pub fn new(config: TmdbConfig) -> Result<Self, MetadataError> {
        let api_key = config
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| MetadataError::Configuration {
                reason: "TMDB_API_KEY is not set".to_string(),
            })?;

        Ok(Self {
            client: reqwest::Client::new(),
            api_base: config.api_base,
            api_key,
        })
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, MetadataError> {
        let mut url =
            Url::parse(&format!("{}{}", self.api_base, path)).map_err(|e| {
                MetadataError::Upstream {
                    reason: format!("invalid endpoint url: {e}"),
                }
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api_key", &self.api_key);
            for (name, value) in params {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    /// Single best-effort GET, decoded as JSON. No retry, no timeout
    /// policy beyond the client defaults.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: Url,
        not_found_id: Option<u32>,
    ) -> Result<T, MetadataError> {
        // Path only: the full URL carries the credential.
        let path = url.path().to_string();
        tracing::debug!("GET {path}");

        let response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|e| MetadataError::Upstream {
                    reason: format!("request failed: {e}"),
                })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            if let Some(id) = not_found_id {
                return Err(MetadataError::NotFound { id });
            }
        }
        if !status.is_success() {
            return Err(MetadataError::Upstream {
                reason: format!("{path} returned status {status}"),
            });
        }

        response.json().await.map_err(|e| MetadataError::Upstream {
            reason: format!("payload decode failed: {e}"),
        })
    }
}

#[async_trait]
impl MetadataProvider for TmdbClient {
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>, MetadataError> {
        if query.trim().is_empty() {
            return Ok(vec![]);
        }
        let url = self.endpoint("/search/movie", &[("query", query)])?;
        let response: ListResponse = self.get_json(url, None).await?;
        Ok(response.results)
    }

    async fn discover_horror(
        &self,
        query: Option<&str>,
    ) -> Result<Vec<MovieSummary>, MetadataError> {
        let mut params = vec![
            ("with_genres", HORROR_GENRE_ID),
            ("sort_by", "popularity.desc"),
        ];
        // with_text_query is not an official discover parameter but TMDB
        // honors it in practice; dropped silently upstream otherwise.
        if let Some(query) = query.filter(|q| !q.trim().is_empty()) {
            params.push(("with_text_query", query));
        }
        let url = self.endpoint("/discover/movie", &params)?;
        let response: ListResponse = self.get_json(url, None).await?;
        Ok(response.results)
    }

    async fn fetch_movie(&self, id: u32) -> Result<MovieRecord, MetadataError> {
        let url = self.endpoint(
            &format!("/movie/{id}"),
            &[("append_to_response", "videos")],
        )?;
        let detail: MovieDetailResponse = self.get_json(url, Some(id)).await?;
        Ok(into_movie_record(detail))
    }

    async fn fetch_watch_providers(&self, id: u32) -> Result<WatchProviderTable, MetadataError> {
        let url = self.endpoint(&format!("/movie/{id}/watch/providers"), &[])?;
        let response: WatchProvidersResponse = self.get_json(url, Some(id)).await?;
        Ok(into_provider_table(response))
    }
}

/// Envelope for search and discover responses.
#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    results: Vec<MovieSummary>,
}

/// Movie detail with the `append_to_response=videos` envelope.
#[derive(Debug, Deserialize)]
struct MovieDetailResponse {
    id: u32,
    title: String,
    overview: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    release_date: Option<String>,
    runtime: Option<u32>,
    vote_average: Option<f32>,
    #[serde(default)]
    genres: Vec<Genre>,
    videos: Option<VideoEnvelope>,
}

#[derive(Debug, Deserialize)]
struct VideoEnvelope {
    #[serde(default)]
    results: Vec<Video>,
}

/// Watch-provider payload: region code keyed offer lists.
///
/// `serde_json`'s preserve_order feature keeps the map in payload order,
/// which the first-available-region fallback depends on.
#[derive(Debug, Deserialize)]
struct WatchProvidersResponse {
    #[serde(default)]
    results: serde_json::Map<String, serde_json::Value>,
}

fn into_movie_record(detail: MovieDetailResponse) -> MovieRecord {
    MovieRecord {
        id: detail.id,
        title: detail.title,
        overview: detail.overview.filter(|s| !s.is_empty()),
        poster_path: detail.poster_path,
        backdrop_path: detail.backdrop_path,
        release_date: detail.release_date.filter(|s| !s.is_empty()),
        runtime: detail.runtime,
        vote_average: detail.vote_average,
        genres: detail.genres,
        videos: detail.videos.map(|v| v.results).unwrap_or_default(),
    }
}

fn into_provider_table(response: WatchProvidersResponse) -> WatchProviderTable {
    let mut table = WatchProviderTable::new();
    for (region, value) in response.results {
        match serde_json::from_value::<RegionOffers>(value) {
            Ok(offers) => table.insert(region, offers),
            Err(e) => {
                tracing::warn!("skipping malformed offers for region {region}: {e}");
            }
        }
    }
    table
}
