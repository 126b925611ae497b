//! Home page - search box and result grid

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use crate::components::{layout, movie};
use crate::server::AppState;

/// Query parameters for the home page.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text movie query
    pub q: Option<String>,
}

/// Renders the landing page.
///
/// With a query the page shows search results; without one it falls back
/// to a popular-horror browse. An upstream failure degrades to a visible
/// notice instead of failing the render.
pub async fn home_page(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let query = params.q.as_deref().map(str::trim).filter(|q| !q.is_empty());

    let results = match query {
        Some(q) => state.metadata.search_movies(q).await,
        None => state.metadata.discover_horror(None).await,
    };

    let body = match results {
        Ok(movies) => {
            let empty_message = if query.is_some() {
                "No horror movies matched your search."
            } else {
                "Search for a horror movie above."
            };
            movie::movie_grid(&movies, empty_message)
        }
        Err(e) => {
            tracing::warn!("movie search failed: {e}");
            r#"<p class="text-center text-gray-400 mt-8">Movie search is unavailable right now. Try again shortly.</p>"#
                .to_string()
        }
    };

    let content = format!(
        "{}\n{}\n{}",
        layout::page_header("Shriek", Some("Find where every horror movie is streaming")),
        layout::search_form(query),
        body
    );

    layout::render_page("Search", "search", &content)
}
