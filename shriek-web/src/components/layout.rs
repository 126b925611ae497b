//! Layout components - page shell, navigation, headers, cards

use axum::response::Html;

use crate::components::escape;

/// Renders a page header with title and optional subtitle.
pub fn page_header(title: &str, subtitle: Option<&str>) -> String {
    let subtitle_html = subtitle
        .map(|s| format!(r#"<p class="text-gray-400 mt-2">{}</p>"#, escape(s)))
        .unwrap_or_default();

    format!(
        r#"<div class="mb-8">
            <h1 class="text-3xl font-bold text-white">{}</h1>
            {subtitle_html}
        </div>"#,
        escape(title)
    )
}

/// Renders a card container with an optional header.
pub fn card(title: Option<&str>, content: &str) -> String {
    let header_html = title
        .map(|t| {
            format!(
                r#"<h3 class="text-lg font-semibold text-white mb-6">{}</h3>"#,
                escape(t)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="bg-gray-800 border border-gray-700 rounded-lg p-6 mb-6">
            {header_html}
            {content}
        </div>"#
    )
}

/// Renders the main navigation bar.
///
/// Highlights the active page based on the provided page identifier.
pub fn nav_bar(active_page: &str) -> String {
    let nav_item = |href: &str, label: &str, page: &str| {
        let active_class = if page == active_page {
            "text-scream-500 bg-scream-500 bg-opacity-10"
        } else {
            "text-gray-300 hover:text-scream-500 hover:bg-gray-700"
        };

        format!(
            r#"<a href="{href}" class="px-3 py-2 rounded-md text-sm font-medium transition-colors {active_class}">{label}</a>"#
        )
    };

    format!(
        r#"<nav class="bg-gray-800 border-b border-gray-700 sticky top-0 z-50">
            <div class="max-w-5xl mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-8">
                        <a href="/" class="text-2xl font-bold text-scream-500">Shriek</a>
                        <div class="hidden md:flex space-x-6">
                            {}
                        </div>
                    </div>
                    <div class="text-sm text-gray-400">Find where every horror movie is streaming</div>
                </div>
            </div>
        </nav>"#,
        nav_item("/", "Search", "search"),
    )
}

/// Renders the search form, pre-filled with the current query.
pub fn search_form(query: Option<&str>) -> String {
    let value = query.map(escape).unwrap_or_default();
    format!(
        r#"<form method="get" action="/" class="flex justify-center gap-2">
            <input type="text" name="q" value="{value}"
                   placeholder="Search for a horror movie..."
                   class="w-full max-w-lg p-3 rounded-lg bg-gray-700 border border-gray-600 text-white placeholder-gray-400 focus:outline-none focus:border-scream-500">
            <button type="submit"
                    class="px-6 py-3 bg-scream-600 hover:bg-scream-700 rounded-lg font-medium transition-colors">
                Search
            </button>
        </form>"#
    )
}

/// Renders a page with the base template.
pub fn render_page(title: &str, active_nav: &str, content: &str) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>{} - Shriek</title>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <script src="https://cdn.tailwindcss.com"></script>
            <script src="https://unpkg.com/htmx.org@1.9.10"></script>
            <script>
                tailwind.config = {{
                    darkMode: 'class',
                    theme: {{
                        extend: {{
                            colors: {{
                                'scream': {{
                                    400: '#f87171',
                                    500: '#ef4444',
                                    600: '#dc2626',
                                    700: '#b91c1c'
                                }}
                            }}
                        }}
                    }}
                }}
            </script>
            <link rel="stylesheet" href="/static/shriek.css">
        </head>
        <body class="bg-gray-900 text-white min-h-screen font-sans">
            {}

            <main class="max-w-5xl mx-auto px-4 py-8">
                {}
            </main>
        </body>
        </html>"#,
        escape(title),
        nav_bar(active_nav),
        content
    );

    Html(html)
}
