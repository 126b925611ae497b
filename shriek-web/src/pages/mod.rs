//! Full page handlers using the component system
//!
//! Pages compose components into complete HTML responses. All pages share
//! the same base layout with HTMX and Tailwind CSS.

pub mod home;
pub mod movie;

// Re-export page handlers
pub use home::home_page;
pub use movie::movie_page;
