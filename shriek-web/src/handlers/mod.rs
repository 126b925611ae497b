//! JSON API handlers for external clients

pub mod api;

// Re-export API handlers
pub use api::{api_movie_providers, api_search};
