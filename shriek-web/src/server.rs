//! HTMX + Tailwind web server for Shriek
//!
//! Serves the search and movie detail pages, HTMX partials, and JSON API
//! endpoints. All state is request-scoped apart from the shared metadata
//! client; there is no cross-request mutable state.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use shriek_core::ShriekConfig;
use shriek_metadata::{MetadataProvider, TmdbClient};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::handlers::{api_movie_providers, api_search};
use crate::htmx::movie_providers_fragment;
use crate::pages::{home_page, movie_page};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Metadata provider collaborator; trait object so tests run against a
    /// canned provider
    pub metadata: Arc<dyn MetadataProvider>,
}

impl AppState {
    /// Creates state over any metadata provider.
    pub fn new(metadata: Arc<dyn MetadataProvider>) -> Self {
        Self { metadata }
    }
}

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Main pages (HTMX + Tailwind)
        .route("/", get(home_page))
        .route("/movie/{id}", get(movie_page))
        // HTMX partial update endpoints
        .route("/htmx/movie/{id}/providers", get(movie_providers_fragment))
        // JSON API endpoints (for external clients)
        .route("/api/search", get(api_search))
        .route("/api/movie/{id}", get(api_movie_providers))
        // Static assets (minimal)
        .nest_service("/static", ServeDir::new("shriek-web/static"))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the web server until shutdown.
///
/// # Errors
///
/// Returns an error when the TMDB credential is missing (configuration
/// error, reported once before any fetch) or the listen address cannot be
/// bound.
pub async fn run_server(config: ShriekConfig) -> Result<(), Box<dyn std::error::Error>> {
    let ShriekConfig { tmdb, http } = config;

    let client = TmdbClient::new(tmdb)?;
    let state = AppState::new(Arc::new(client));
    let app = build_router(state);

    tracing::info!("Shriek running on http://{}", http.bind);
    let listener = tokio::net::TcpListener::bind(&http.bind).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
