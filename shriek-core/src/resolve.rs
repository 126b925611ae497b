//! Provider resolution: deduplication, tier merging, and region selection.
//!
//! Transforms one region's raw watch offers plus a movie record into
//! render-ready display rows. The resolver never fabricates providers and
//! never re-sorts: upstream ordering within a tier is assumed to already
//! reflect relevance.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::canonical::canonicalize;
use crate::links::{logo_url, resolve_href};
use crate::types::{MovieRecord, ProviderEntry, RegionOffers, Tier, WatchProviderTable};

/// Display label for a resolved row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TierLabel {
    /// Flatrate offers
    Subscription,
    /// Merged rent and buy offers
    RentOrBuy,
}

impl TierLabel {
    /// User-facing label text.
    pub fn as_str(self) -> &'static str {
        match self {
            TierLabel::Subscription => "Subscription",
            TierLabel::RentOrBuy => "Rent or Buy",
        }
    }
}

impl fmt::Display for TierLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render-ready streaming option for one provider tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalProvider {
    /// Canonical service name, or the raw vendor name when unmapped
    pub name: String,
    /// Full logo URL, when the raw entry carried a logo path
    pub logo_url: Option<String>,
    /// Outbound link; `None` renders as a non-clickable tile
    pub href: Option<String>,
}

/// One labeled row of provider tiles.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayRow {
    /// Row label
    pub label: TierLabel,
    /// Providers in upstream order, deduplicated by canonical name
    pub providers: Vec<CanonicalProvider>,
}

/// Resolves one tier's raw entries into annotated providers.
///
/// The `seen` set is shared across all tiers of a region so a provider
/// listed under several tiers (possibly under different brand spellings)
/// is emitted exactly once, by its first occurrence. Upstream order is
/// preserved within the tier.
fn resolve_tier(
    entries: &[ProviderEntry],
    movie: &MovieRecord,
    seen: &mut HashSet<String>,
) -> Vec<CanonicalProvider> {
    let mut resolved = Vec::new();
    for entry in entries {
        let name = canonicalize(&entry.provider_name);
        if !seen.insert(name.clone()) {
            continue;
        }
        resolved.push(CanonicalProvider {
            logo_url: entry.logo_path.as_deref().map(logo_url),
            href: resolve_href(&name, movie),
            name,
        });
    }
    resolved
}

/// Builds the display rows for one region's offers.
///
/// Tiers are processed flatrate, rent, buy through one shared seen-set, so
/// a provider appearing in several tiers lands in the Subscription row.
/// Rent and buy merge into a single "Rent or Buy" row, rent first. Empty
/// rows are omitted; a region with no offers yields no rows at all and the
/// caller renders nothing for it.
pub fn build_display_rows(offers: &RegionOffers, movie: &MovieRecord) -> Vec<DisplayRow> {
    let mut seen = HashSet::new();

    let subscription = resolve_tier(offers.tier(Tier::Flatrate), movie, &mut seen);
    let mut rent_or_buy = resolve_tier(offers.tier(Tier::Rent), movie, &mut seen);
    rent_or_buy.extend(resolve_tier(offers.tier(Tier::Buy), movie, &mut seen));

    let mut rows = Vec::new();
    if !subscription.is_empty() {
        rows.push(DisplayRow {
            label: TierLabel::Subscription,
            providers: subscription,
        });
    }
    if !rent_or_buy.is_empty() {
        rows.push(DisplayRow {
            label: TierLabel::RentOrBuy,
            providers: rent_or_buy,
        });
    }
    rows
}

/// Picks the region whose offers should be displayed.
///
/// The candidate defaults to "US", switching to "GB" when the locale hint
/// (typically the request's Accept-Language value) looks British. When the
/// candidate region is absent, the first region in payload order is used;
/// that fallback is best-effort since upstream key order is not stable.
/// An empty table yields `None`.
pub fn select_region(table: &WatchProviderTable, locale_hint: Option<&str>) -> Option<String> {
    let candidate = match locale_hint {
        Some(hint) => {
            let hint = hint.to_lowercase();
            if hint.contains("gb") || hint.contains("uk") {
                "GB"
            } else {
                "US"
            }
        }
        None => "US",
    };

    if table.get(candidate).is_some() {
        return Some(candidate.to_string());
    }
    table.first_region().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> ProviderEntry {
        ProviderEntry {
            provider_name: name.to_string(),
            logo_path: None,
        }
    }

    fn entry_with_logo(name: &str, logo_path: &str) -> ProviderEntry {
        ProviderEntry {
            provider_name: name.to_string(),
            logo_path: Some(logo_path.to_string()),
        }
    }

    fn movie(title: &str) -> MovieRecord {
        MovieRecord {
            id: 1,
            title: title.to_string(),
            overview: None,
            poster_path: None,
            backdrop_path: None,
            release_date: None,
            runtime: None,
            vote_average: None,
            genres: vec![],
            videos: vec![],
        }
    }

    #[test]
    fn rows_contain_no_duplicate_canonical_names() {
        let offers = RegionOffers {
            flatrate: vec![entry("Netflix"), entry("Hulu")],
            rent: vec![entry("NETFLIX"), entry("Google Play")],
            buy: vec![entry("Netflix basic with Ads"), entry("Google Play Movies")],
        };

        let rows = build_display_rows(&offers, &movie("Scream"));
        let mut names: Vec<&str> = rows
            .iter()
            .flat_map(|row| row.providers.iter().map(|p| p.name.as_str()))
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total, "duplicate canonical names in output");
    }

    #[test]
    fn flatrate_occurrence_wins_over_buy() {
        let offers = RegionOffers {
            flatrate: vec![entry("Amazon Prime Video")],
            rent: vec![],
            buy: vec![entry("Prime Video")],
        };

        let rows = build_display_rows(&offers, &movie("Scream"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, TierLabel::Subscription);
        assert_eq!(rows[0].providers.len(), 1);
        assert_eq!(rows[0].providers[0].name, "Prime Video");
    }

    #[test]
    fn rent_and_buy_merge_rent_first() {
        let offers = RegionOffers {
            flatrate: vec![entry("Shudder")],
            rent: vec![entry("Google Play"), entry("Vudu")],
            buy: vec![entry("Microsoft Store")],
        };

        let rows = build_display_rows(&offers, &movie("Scream"));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, TierLabel::Subscription);
        assert_eq!(rows[1].label, TierLabel::RentOrBuy);
        let names: Vec<&str> = rows[1].providers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Google Play", "Vudu", "Microsoft Store"]);
    }

    #[test]
    fn empty_offers_yield_no_rows() {
        let rows = build_display_rows(&RegionOffers::default(), &movie("Scream"));
        assert!(rows.is_empty());
    }

    #[test]
    fn empty_flatrate_row_is_omitted() {
        let offers = RegionOffers {
            flatrate: vec![],
            rent: vec![entry("Vudu")],
            buy: vec![],
        };

        let rows = build_display_rows(&offers, &movie("Scream"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, TierLabel::RentOrBuy);
    }

    #[test]
    fn upstream_order_is_preserved_within_a_tier() {
        let offers = RegionOffers {
            flatrate: vec![entry("Shudder"), entry("Hulu"), entry("Netflix")],
            rent: vec![],
            buy: vec![],
        };

        let rows = build_display_rows(&offers, &movie("Scream"));
        let names: Vec<&str> = rows[0].providers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Shudder", "Hulu", "Netflix"]);
    }

    #[test]
    fn logo_path_becomes_cdn_url_and_missing_logo_stays_none() {
        let offers = RegionOffers {
            flatrate: vec![entry_with_logo("Netflix", "/nflx.jpg"), entry("Mubi")],
            rent: vec![],
            buy: vec![],
        };

        let rows = build_display_rows(&offers, &movie("Scream"));
        assert_eq!(
            rows[0].providers[0].logo_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w92/nflx.jpg")
        );
        assert!(rows[0].providers[1].logo_url.is_none());
    }

    #[test]
    fn unmapped_provider_is_kept_without_link() {
        let offers = RegionOffers {
            flatrate: vec![entry("Mubi")],
            rent: vec![],
            buy: vec![],
        };

        let rows = build_display_rows(&offers, &movie("Scream"));
        assert_eq!(rows[0].providers[0].name, "Mubi");
        assert!(rows[0].providers[0].href.is_none());
    }

    #[test]
    fn select_region_defaults_to_us() {
        let mut table = WatchProviderTable::new();
        table.insert("US", RegionOffers::default());
        table.insert("GB", RegionOffers::default());

        assert_eq!(select_region(&table, None), Some("US".to_string()));
        assert_eq!(
            select_region(&table, Some("en-US,en;q=0.9")),
            Some("US".to_string())
        );
    }

    #[test]
    fn select_region_honors_british_locale_hint() {
        let mut table = WatchProviderTable::new();
        table.insert("US", RegionOffers::default());
        table.insert("GB", RegionOffers::default());

        assert_eq!(
            select_region(&table, Some("en-GB,en;q=0.9")),
            Some("GB".to_string())
        );
    }

    #[test]
    fn select_region_falls_back_to_first_available() {
        let mut table = WatchProviderTable::new();
        table.insert("FR", RegionOffers::default());

        assert_eq!(select_region(&table, None), Some("FR".to_string()));
        assert_eq!(
            select_region(&table, Some("en-GB")),
            Some("FR".to_string())
        );
    }

    #[test]
    fn select_region_empty_table_yields_none() {
        let table = WatchProviderTable::new();
        assert_eq!(select_region(&table, None), None);
    }
}
