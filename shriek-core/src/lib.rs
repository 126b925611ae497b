//! Shriek Core - domain types and provider resolution

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Hosts the provider resolver that turns raw per-region watch offers into
//! deduplicated, link-annotated display rows, plus the shared configuration
//! and tracing setup used by the rest of the workspace.

pub mod canonical;
pub mod config;
pub mod links;
pub mod resolve;
pub mod tracing_setup;
pub mod types;

// Re-export main types
pub use canonical::canonicalize;
pub use config::ShriekConfig;
pub use resolve::{CanonicalProvider, DisplayRow, TierLabel, build_display_rows, select_region};
pub use types::{
    Genre, MovieRecord, MovieSummary, ProviderEntry, RegionOffers, Tier, Video, WatchProviderTable,
};
