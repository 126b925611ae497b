//! HTMX partial update handlers
//!
//! Server-rendered HTML fragments swapped into the page after load. The
//! provider fragment mirrors the deferred provider fetch of the detail
//! view: the movie body renders immediately and streaming availability
//! arrives (or degrades) on its own.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, header};
use axum::response::Html;
use shriek_core::resolve::{build_display_rows, select_region};

use crate::components::providers;
use crate::server::AppState;

/// Renders the "Where to watch" fragment for one movie.
///
/// Fetches the movie record and watch-provider table concurrently; the
/// record feeds link resolution, the table feeds the rows. Any failure
/// degrades to the unavailable notice rather than an error status, so the
/// surrounding page is never taken down. The displayed region comes from
/// the Accept-Language header, with first-available fallback.
pub async fn movie_providers_fragment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Html<String> {
    let Ok(id) = id.parse::<u32>() else {
        return Html(providers::provider_unavailable());
    };

    let (movie_result, table_result) = tokio::join!(
        state.metadata.fetch_movie(id),
        state.metadata.fetch_watch_providers(id)
    );
    let (movie, table) = match (movie_result, table_result) {
        (Ok(movie), Ok(table)) => (movie, table),
        (movie_result, table_result) => {
            if let Err(e) = movie_result {
                tracing::warn!("movie fetch failed for provider fragment {id}: {e}");
            }
            if let Err(e) = table_result {
                tracing::warn!("provider fetch failed for movie {id}: {e}");
            }
            return Html(providers::provider_unavailable());
        }
    };

    let locale = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    let Some(region) = select_region(&table, locale) else {
        // No region data at all: render nothing, not an empty container.
        return Html(String::new());
    };
    let Some(offers) = table.get(&region) else {
        return Html(String::new());
    };

    let rows = build_display_rows(offers, &movie);
    Html(providers::provider_section(&rows, &region))
}
