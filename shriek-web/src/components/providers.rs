//! Provider components - tiered rows of streaming-service tiles

use shriek_core::resolve::{CanonicalProvider, DisplayRow};

use crate::components::escape;

/// Renders one provider tile.
///
/// A tile with a resolved link opens in a new tab; one without renders as
/// a dimmed, non-interactive indicator. A missing logo falls back to the
/// provider name as a text label, never a broken image.
fn provider_tile(provider: &CanonicalProvider) -> String {
    let name = escape(&provider.name);
    let content = match provider.logo_url.as_deref() {
        Some(logo) => format!(r#"<img src="{logo}" alt="{name}" class="max-w-full max-h-full">"#),
        None => format!(r#"<span class="text-xs text-gray-900 text-center">{name}</span>"#),
    };

    match provider.href.as_deref() {
        Some(href) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" title="{name}"
               class="block w-10 h-10 rounded overflow-hidden bg-white flex items-center justify-center">{content}</a>"#,
            escape(href)
        ),
        None => format!(
            r#"<div title="{name}"
               class="block w-10 h-10 rounded overflow-hidden bg-white flex items-center justify-center opacity-60">{content}</div>"#
        ),
    }
}

/// Renders the "Where to watch" section for one region.
///
/// Empty input renders nothing at all, not an empty container.
pub fn provider_section(rows: &[DisplayRow], region: &str) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let rows_html: String = rows
        .iter()
        .map(|row| {
            let tiles: String = row.providers.iter().map(provider_tile).collect();
            format!(
                r#"<div class="flex items-center gap-4 mb-3">
                    <div class="w-28 text-sm font-medium text-gray-300">{}</div>
                    <div class="flex items-center gap-3 flex-wrap">{tiles}</div>
                </div>"#,
                row.label
            )
        })
        .collect();

    format!(
        r#"<section class="mt-6 p-4 border border-gray-700 rounded">
            <h3 class="text-sm text-gray-400 mb-3">Where to watch ({})</h3>
            {rows_html}
        </section>"#,
        escape(region)
    )
}

/// Renders the degraded state shown when provider data cannot be fetched.
pub fn provider_unavailable() -> String {
    r#"<p class="mt-2 text-sm text-gray-500">Provider information unavailable.</p>"#.to_string()
}

#[cfg(test)]
mod tests {
    use shriek_core::resolve::TierLabel;

    use super::*;

    fn provider(name: &str, logo: Option<&str>, href: Option<&str>) -> CanonicalProvider {
        CanonicalProvider {
            name: name.to_string(),
            logo_url: logo.map(str::to_string),
            href: href.map(str::to_string),
        }
    }

    #[test]
    fn linked_tile_opens_in_new_tab() {
        let rows = vec![DisplayRow {
            label: TierLabel::Subscription,
            providers: vec![provider(
                "Netflix",
                Some("https://image.tmdb.org/t/p/w92/n.jpg"),
                Some("https://www.netflix.com/search?q=Scream"),
            )],
        }];

        let html = provider_section(&rows, "US");
        assert!(html.contains("Where to watch (US)"));
        assert!(html.contains("Subscription"));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains("https://www.netflix.com/search?q=Scream"));
    }

    #[test]
    fn linkless_tile_is_dimmed_not_dropped() {
        let rows = vec![DisplayRow {
            label: TierLabel::RentOrBuy,
            providers: vec![provider("Mubi", None, None)],
        }];

        let html = provider_section(&rows, "FR");
        assert!(!html.contains("<a "));
        assert!(html.contains("opacity-60"));
        assert!(html.contains("Mubi"));
    }

    #[test]
    fn missing_logo_renders_text_label() {
        let rows = vec![DisplayRow {
            label: TierLabel::Subscription,
            providers: vec![provider("Shudder", None, Some("https://www.shudder.com"))],
        }];

        let html = provider_section(&rows, "US");
        assert!(!html.contains("<img"));
        assert!(html.contains(">Shudder</span>"));
    }

    #[test]
    fn empty_rows_render_nothing() {
        assert_eq!(provider_section(&[], "US"), "");
    }
}
