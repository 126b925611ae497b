//! Metadata provider abstraction.
//!
//! The web layer talks to this trait instead of the TMDB client directly,
//! which keeps handlers testable against a canned in-memory provider.

use async_trait::async_trait;
use shriek_core::types::{
    MovieRecord, MovieSummary, ProviderEntry, RegionOffers, Video, WatchProviderTable,
};

use crate::errors::MetadataError;

/// Read-only movie metadata source.
#[async_trait]
pub trait MetadataProvider: Send + Sync + std::fmt::Debug {
    /// Free-text movie search, ordered by upstream relevance.
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>, MetadataError>;

    /// Horror catalog browse, most popular first, optionally narrowed by a
    /// text query.
    async fn discover_horror(
        &self,
        query: Option<&str>,
    ) -> Result<Vec<MovieSummary>, MetadataError>;

    /// Single movie record by identifier, with its video list attached.
    async fn fetch_movie(&self, id: u32) -> Result<MovieRecord, MetadataError>;

    /// Per-region watch-provider table for a movie.
    async fn fetch_watch_providers(&self, id: u32) -> Result<WatchProviderTable, MetadataError>;
}

/// In-memory provider with a small fixed catalog.
///
/// Used by handler and page tests; never reaches the network. Movie id 1
/// exists with providers in US and GB, id 2 exists with an empty provider
/// table, and everything else is not found.
#[derive(Debug, Default)]
pub struct MockProvider;

impl MockProvider {
    /// Creates the mock provider.
    pub fn new() -> Self {
        Self
    }

    fn summary(id: u32, title: &str, year: &str) -> MovieSummary {
        MovieSummary {
            id,
            title: title.to_string(),
            poster_path: Some(format!("/poster-{id}.jpg")),
            release_date: Some(format!("{year}-10-01")),
            overview: Some(format!("Mock overview for {title}")),
            vote_average: Some(7.1),
        }
    }

    fn entry(name: &str) -> ProviderEntry {
        ProviderEntry {
            provider_name: name.to_string(),
            logo_path: Some("/logo.jpg".to_string()),
        }
    }
}

#[async_trait]
impl MetadataProvider for MockProvider {
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>, MetadataError> {
        if query.trim().is_empty() {
            return Ok(vec![]);
        }
        Ok(vec![
            Self::summary(1, "The Haunting", "1963"),
            Self::summary(2, "Suspiria", "1977"),
        ])
    }

    async fn discover_horror(
        &self,
        _query: Option<&str>,
    ) -> Result<Vec<MovieSummary>, MetadataError> {
        Ok(vec![
            Self::summary(1, "The Haunting", "1963"),
            Self::summary(2, "Suspiria", "1977"),
        ])
    }

    async fn fetch_movie(&self, id: u32) -> Result<MovieRecord, MetadataError> {
        match id {
            1 => Ok(MovieRecord {
                id: 1,
                title: "The Haunting".to_string(),
                overview: Some("An anthropologist invites guests to Hill House.".to_string()),
                poster_path: Some("/poster-1.jpg".to_string()),
                backdrop_path: None,
                release_date: Some("1963-09-18".to_string()),
                runtime: Some(112),
                vote_average: Some(7.5),
                genres: vec![],
                videos: vec![Video {
                    site: "YouTube".to_string(),
                    key: "mock-trailer".to_string(),
                    video_type: "Trailer".to_string(),
                    name: "Official Trailer".to_string(),
                }],
            }),
            2 => Ok(MovieRecord {
                id: 2,
                title: "Suspiria".to_string(),
                overview: None,
                poster_path: None,
                backdrop_path: None,
                release_date: Some("1977-02-01".to_string()),
                runtime: Some(99),
                vote_average: Some(7.9),
                genres: vec![],
                videos: vec![],
            }),
            _ => Err(MetadataError::NotFound { id }),
        }
    }

    async fn fetch_watch_providers(&self, id: u32) -> Result<WatchProviderTable, MetadataError> {
        match id {
            1 => {
                let mut table = WatchProviderTable::new();
                table.insert(
                    "US",
                    RegionOffers {
                        flatrate: vec![Self::entry("Shudder"), Self::entry("Netflix")],
                        rent: vec![Self::entry("Google Play Movies")],
                        buy: vec![Self::entry("Vudu")],
                    },
                );
                table.insert(
                    "GB",
                    RegionOffers {
                        flatrate: vec![Self::entry("Sky Go")],
                        rent: vec![],
                        buy: vec![],
                    },
                );
                Ok(table)
            }
            2 => Ok(WatchProviderTable::new()),
            _ => Err(MetadataError::NotFound { id }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_search_returns_catalog() {
        let provider = MockProvider::new();
        let results = provider.search_movies("haunting").await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "The Haunting");
    }

    #[tokio::test]
    async fn mock_unknown_id_is_not_found() {
        let provider = MockProvider::new();
        let err = provider.fetch_movie(99).await.unwrap_err();
        assert!(matches!(err, MetadataError::NotFound { id: 99 }));
    }

    #[tokio::test]
    async fn mock_providers_preserve_region_order() {
        let provider = MockProvider::new();
        let table = provider.fetch_watch_providers(1).await.unwrap();
        assert_eq!(table.first_region(), Some("US"));
        assert!(table.get("GB").is_some());
    }
}
