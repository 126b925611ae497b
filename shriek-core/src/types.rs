//! Shared domain types for movies and watch-provider tables.
//!
//! Everything here is immutable, request-scoped data: built fresh from one
//! metadata-provider response, read by the resolver and the presentation
//! layer, then discarded.

use serde::{Deserialize, Serialize};

/// Raw streaming offer as reported by the metadata provider.
///
/// Vendor names are free text and vary in branding ("Amazon Prime Video"
/// vs "Prime Video"); canonicalization happens downstream in the resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderEntry {
    /// Vendor-supplied provider name
    pub provider_name: String,
    /// Relative logo image path on the image CDN, when available
    pub logo_path: Option<String>,
}

/// Commercial model under which a provider carries a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Included with a subscription
    Flatrate,
    /// Transactional rental
    Rent,
    /// Transactional purchase
    Buy,
}

/// One region's offer lists, one per tier.
///
/// The tier an entry belongs to is positional (which list it came from),
/// not a field on the entry itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionOffers {
    /// Subscription offers
    #[serde(default)]
    pub flatrate: Vec<ProviderEntry>,
    /// Rental offers
    #[serde(default)]
    pub rent: Vec<ProviderEntry>,
    /// Purchase offers
    #[serde(default)]
    pub buy: Vec<ProviderEntry>,
}

impl RegionOffers {
    /// Returns true when no tier carries any offer.
    pub fn is_empty(&self) -> bool {
        self.flatrate.is_empty() && self.rent.is_empty() && self.buy.is_empty()
    }

    /// Offer list for the given tier.
    pub fn tier(&self, tier: Tier) -> &[ProviderEntry] {
        match tier {
            Tier::Flatrate => &self.flatrate,
            Tier::Rent => &self.rent,
            Tier::Buy => &self.buy,
        }
    }
}

/// Region-code keyed offer table, preserving upstream payload order.
///
/// Upstream key order is not contractually stable, so the "first available
/// region" fallback is only reproducible per response. Keeping payload
/// order at least makes it deterministic for a given payload instead of
/// depending on hash-map iteration.
#[derive(Debug, Clone, Default)]
pub struct WatchProviderTable {
    regions: Vec<(String, RegionOffers)>,
}

impl WatchProviderTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a region in payload order. Re-inserting an existing code
    /// replaces its offers in place.
    pub fn insert(&mut self, region: impl Into<String>, offers: RegionOffers) {
        let region = region.into();
        if let Some(slot) = self.regions.iter_mut().find(|(code, _)| *code == region) {
            slot.1 = offers;
        } else {
            self.regions.push((region, offers));
        }
    }

    /// Offers for a region code, if present.
    pub fn get(&self, region: &str) -> Option<&RegionOffers> {
        self.regions
            .iter()
            .find(|(code, _)| code == region)
            .map(|(_, offers)| offers)
    }

    /// First region code in payload order.
    pub fn first_region(&self) -> Option<&str> {
        self.regions.first().map(|(code, _)| code.as_str())
    }

    /// True when no region is present.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Iterates regions in payload order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegionOffers)> {
        self.regions
            .iter()
            .map(|(code, offers)| (code.as_str(), offers))
    }
}

/// Video entry attached to a movie record (trailers, features, clips).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    /// Hosting site, e.g. "YouTube"
    pub site: String,
    /// Site-specific video key
    pub key: String,
    /// Video classification, e.g. "Trailer" or "Featurette"
    #[serde(rename = "type")]
    pub video_type: String,
    /// Human-readable video title
    #[serde(default)]
    pub name: String,
}

/// Movie genre.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    /// Upstream genre identifier
    pub id: u32,
    /// Genre name
    pub name: String,
}

/// Full movie metadata for the detail view.
///
/// Read-only input to the resolver: the title feeds search-URL templating
/// and the video list feeds YouTube deep-linking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Upstream movie identifier
    pub id: u32,
    /// Movie title
    pub title: String,
    /// Plot overview
    pub overview: Option<String>,
    /// Relative poster image path
    pub poster_path: Option<String>,
    /// Relative backdrop image path
    pub backdrop_path: Option<String>,
    /// Release date as "YYYY-MM-DD"
    pub release_date: Option<String>,
    /// Runtime in minutes
    pub runtime: Option<u32>,
    /// Average vote score (0-10)
    pub vote_average: Option<f32>,
    /// Genres
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Associated videos
    #[serde(default)]
    pub videos: Vec<Video>,
}

impl MovieRecord {
    /// Release year parsed from the release date, when present and valid.
    pub fn release_year(&self) -> Option<i32> {
        use chrono::Datelike;

        self.release_date
            .as_deref()
            .and_then(|d| chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .map(|d| d.year())
    }
}

/// Compact movie metadata for search result cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Upstream movie identifier
    pub id: u32,
    /// Movie title
    pub title: String,
    /// Relative poster image path
    pub poster_path: Option<String>,
    /// Release date as "YYYY-MM-DD"
    pub release_date: Option<String>,
    /// Plot overview
    pub overview: Option<String>,
    /// Average vote score (0-10)
    pub vote_average: Option<f32>,
}

impl MovieSummary {
    /// Release year for card display, sliced from the release date.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .filter(|d| d.len() >= 4)
            .map(|d| &d[..4])
    }
}
