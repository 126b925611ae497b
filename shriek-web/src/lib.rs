//! Shriek Web - server-rendered UI and JSON API

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![warn(clippy::too_many_lines)]
//!
//! HTMX + Tailwind pages rendered server-side, with JSON endpoints for
//! external clients. All movie data comes from the metadata provider; a
//! failed upstream call degrades to a visible unavailable state instead of
//! aborting the page render.

pub mod components;
pub mod handlers;
pub mod htmx;
pub mod pages;
pub mod server;

// Re-export main types
pub use server::{AppState, run_server};
