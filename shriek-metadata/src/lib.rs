//! Shriek Metadata - TMDB client

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![warn(clippy::too_many_lines)]
//!
//! The metadata-provider collaborator: movie search and discovery, detail
//! lookup with attached videos, and per-region watch-provider tables, all
//! read-only against the TMDB HTTP API. One best-effort call per request,
//! no caching and no retry.

pub mod errors;
pub mod provider;
pub mod tmdb;

// Re-export main types
pub use errors::MetadataError;
pub use provider::{MetadataProvider, MockProvider};
pub use tmdb::TmdbClient;

/// Convenience type alias for Results with MetadataError.
pub type Result<T> = std::result::Result<T, MetadataError>;
