//! Error types for metadata lookups.
//!
//! All kinds are local to one request; none persist or affect later
//! requests. The presentation layer maps them onto distinct user-facing
//! states instead of letting any of them abort a page render.

use thiserror::Error;

/// Errors that can occur while talking to the metadata provider.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// Required upstream credential is absent or unusable.
    ///
    /// Detected at client construction so every dependent fetch is
    /// short-circuited by a single typed error.
    #[error("Configuration error: {reason}")]
    Configuration {
        /// What is missing or wrong
        reason: String,
    },

    /// Network failure or non-success status from the upstream API.
    #[error("Metadata provider unavailable: {reason}")]
    Upstream {
        /// The reason the upstream call failed
        reason: String,
    },

    /// The identifier has no corresponding movie record.
    #[error("No movie found for id {id}")]
    NotFound {
        /// The identifier that was looked up
        id: u32,
    },

    /// Invalid input, rejected before any network call.
    #[error("Invalid request: {reason}")]
    Malformed {
        /// What was wrong with the input
        reason: String,
    },
}
