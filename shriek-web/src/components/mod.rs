//! Reusable HTML components
//!
//! Components are plain functions returning HTML strings, composed by the
//! page handlers. All dynamic text goes through [`escape`] before
//! interpolation.

pub mod layout;
pub mod movie;
pub mod providers;

/// Escapes text for safe interpolation into HTML content and attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
