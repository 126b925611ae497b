//! Movie detail page

use axum::extract::{Path, State};
use axum::response::Html;
use shriek_metadata::MetadataError;

use crate::components::layout;
use crate::components::movie as movie_components;
use crate::server::AppState;

/// Renders the movie detail page.
///
/// The id is validated before any upstream call. The provider section is
/// deferred to an HTMX fragment so it can fail independently of the movie
/// body; navigating away aborts the in-flight fragment request, and the
/// server-side future is dropped with it, so a late result is never
/// applied to a page that is gone.
pub async fn movie_page(State(state): State<AppState>, Path(id): Path<String>) -> Html<String> {
    let Ok(id) = id.parse::<u32>() else {
        return message_page(
            "Invalid movie id",
            "A numeric movie id is required.",
            &id,
        );
    };

    match state.metadata.fetch_movie(id).await {
        Ok(movie) => {
            let provider_section = format!(
                r#"<div hx-get="/htmx/movie/{id}/providers" hx-trigger="load" hx-swap="innerHTML">
                    <p class="mt-6 text-sm text-gray-500">Checking where to watch...</p>
                </div>"#
            );
            let content = movie_components::detail_block(&movie, &provider_section);
            layout::render_page(&movie.title, "movie", &content)
        }
        Err(MetadataError::NotFound { id }) => not_found_page(id),
        Err(e) => {
            tracing::warn!("movie fetch failed for id {id}: {e}");
            message_page(
                "Unable to load movie",
                "The movie database is unavailable right now. Try again shortly.",
                &id.to_string(),
            )
        }
    }
}

/// Distinct not-found page with navigation options.
fn not_found_page(id: u32) -> Html<String> {
    let content = format!(
        r#"<div class="text-center mt-6">
            <p class="text-lg font-semibold">Movie not found</p>
            <p class="mt-2 text-sm text-gray-400">No data for ID: {id}</p>
            <div class="mt-4 space-x-4">
                <a href="/" class="text-scream-500 underline">Home</a>
                <a href="/?q=" class="text-scream-500 underline">Search</a>
            </div>
        </div>"#
    );
    layout::render_page("Movie not found", "movie", &content)
}

fn message_page(title: &str, message: &str, detail: &str) -> Html<String> {
    let content = format!(
        r#"<div class="text-center mt-6">
            <p class="text-lg font-semibold">{}</p>
            <p class="mt-2 text-sm text-gray-400">{} ({})</p>
            <div class="mt-4">
                <a href="/" class="text-scream-500 underline">Home</a>
            </div>
        </div>"#,
        crate::components::escape(title),
        crate::components::escape(message),
        crate::components::escape(detail)
    );
    layout::render_page(title, "movie", &content)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shriek_metadata::MockProvider;

    use super::*;

    fn state() -> AppState {
        AppState::new(Arc::new(MockProvider::new()))
    }

    #[tokio::test]
    async fn detail_page_defers_providers_to_htmx_fragment() {
        let page = movie_page(State(state()), Path("1".to_string())).await;
        assert!(page.0.contains("The Haunting"));
        assert!(page.0.contains(r#"hx-get="/htmx/movie/1/providers""#));
        assert!(page.0.contains("Checking where to watch..."));
    }

    #[tokio::test]
    async fn invalid_id_is_rejected_before_any_fetch() {
        let page = movie_page(State(state()), Path("abc".to_string())).await;
        assert!(page.0.contains("Invalid movie id"));
    }

    #[tokio::test]
    async fn unknown_id_gets_distinct_not_found_page() {
        let page = movie_page(State(state()), Path("99".to_string())).await;
        assert!(page.0.contains("Movie not found"));
        assert!(page.0.contains("No data for ID: 99"));
        assert!(page.0.contains(r#"href="/""#));
    }
}
