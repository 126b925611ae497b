//! Movie components - result cards and the detail block

use shriek_core::links::poster_url;
use shriek_core::types::{MovieRecord, MovieSummary};

use crate::components::escape;

/// Renders one search result card linking to the detail page.
pub fn movie_card(movie: &MovieSummary) -> String {
    let poster_html = match movie.poster_path.as_deref() {
        Some(path) => format!(
            r#"<img src="{}" alt="{}" class="w-full h-60 object-cover">"#,
            poster_url(path, "w200"),
            escape(&movie.title)
        ),
        None => r#"<div class="w-full h-60 bg-gray-700 flex items-center justify-center text-4xl">🎃</div>"#
            .to_string(),
    };

    let year_html = movie
        .release_year()
        .map(|year| format!(r#"<p class="text-xs text-gray-400">{year}</p>"#))
        .unwrap_or_default();

    format!(
        r#"<a href="/movie/{}" class="m-2 w-40 hover:scale-105 transition-transform">
            <div class="rounded-lg overflow-hidden shadow-lg bg-gray-800">
                {poster_html}
                <div class="p-2">
                    <h3 class="text-sm font-bold">{}</h3>
                    {year_html}
                </div>
            </div>
        </a>"#,
        movie.id,
        escape(&movie.title)
    )
}

/// Renders a result grid, or a neutral prompt when there are no results.
pub fn movie_grid(movies: &[MovieSummary], empty_message: &str) -> String {
    if movies.is_empty() {
        return format!(
            r#"<p class="text-center text-gray-400 mt-8">{}</p>"#,
            escape(empty_message)
        );
    }

    let cards: String = movies.iter().map(movie_card).collect();
    format!(r#"<div class="flex flex-wrap justify-center mt-8">{cards}</div>"#)
}

/// Renders the detail block: poster, title, release date, and overview.
///
/// The provider section is appended separately by the caller so a failed
/// provider fetch never takes the movie body down with it.
pub fn detail_block(movie: &MovieRecord, provider_section: &str) -> String {
    let poster = movie
        .poster_path
        .as_deref()
        .or(movie.backdrop_path.as_deref());
    let poster_html = match poster {
        Some(path) => format!(
            r#"<img src="{}" alt="{}" class="rounded shadow-md object-contain" style="max-width: 315px">"#,
            poster_url(path, "w500"),
            escape(&movie.title)
        ),
        None => r#"<div class="w-60 h-80 bg-gray-700 rounded flex items-center justify-center text-6xl">🎃</div>"#
            .to_string(),
    };

    let released_html = movie
        .release_date
        .as_deref()
        .map(|date| {
            format!(
                r#"<p class="text-sm text-gray-400 mt-2">Released: {}</p>"#,
                escape(date)
            )
        })
        .unwrap_or_default();

    let runtime_html = movie
        .runtime
        .map(|minutes| format!(r#"<p class="text-sm text-gray-400">{minutes} min</p>"#))
        .unwrap_or_default();

    let overview = movie
        .overview
        .as_deref()
        .map(escape)
        .unwrap_or_else(|| "No description available.".to_string());

    format!(
        r#"<div class="flex flex-col md:flex-row gap-6 items-start">
            {poster_html}
            <div class="flex-1">
                <h1 class="text-2xl font-bold">{}</h1>
                {released_html}
                {runtime_html}
                <div class="mt-4">
                    <p>{overview}</p>
                </div>
                {provider_section}
            </div>
        </div>"#,
        escape(&movie.title)
    )
}
