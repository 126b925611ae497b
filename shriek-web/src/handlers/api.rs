//! JSON API endpoints mirroring the page data
//!
//! `/api/search` returns movie summaries for a query; `/api/movie/{id}`
//! returns the raw watch-provider table keyed by region, in upstream
//! order. Error kinds map onto distinct status codes so clients can tell
//! a bad request from a missing movie from an upstream outage.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{Value, json};
use shriek_metadata::MetadataError;

use crate::server::AppState;

/// Query parameters for `/api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Free-text movie query
    pub q: Option<String>,
}

type ApiError = (StatusCode, Json<Value>);

fn error_response(err: &MetadataError) -> ApiError {
    let status = match err {
        MetadataError::Malformed { .. } => StatusCode::BAD_REQUEST,
        MetadataError::NotFound { .. } => StatusCode::NOT_FOUND,
        MetadataError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        MetadataError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": err.to_string() })))
}

/// GET /api/search?q= - movie summaries for a free-text query.
///
/// # Errors
///
/// `502` when the metadata provider is unreachable.
pub async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Value>, ApiError> {
    let query = params.q.unwrap_or_default();
    let results = state
        .metadata
        .search_movies(&query)
        .await
        .map_err(|e| error_response(&e))?;
    Ok(Json(json!(results)))
}

/// GET /api/movie/{id} - watch-provider table for one movie.
///
/// # Errors
///
/// `400` for a non-numeric id, `404` when the movie does not exist, `502`
/// when the metadata provider is unreachable.
pub async fn api_movie_providers(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id: u32 = id.parse().map_err(|_| {
        error_response(&MetadataError::Malformed {
            reason: "movie id must be numeric".to_string(),
        })
    })?;

    let table = state
        .metadata
        .fetch_watch_providers(id)
        .await
        .map_err(|e| error_response(&e))?;

    let mut results = serde_json::Map::new();
    for (region, offers) in table.iter() {
        results.insert(
            region.to_string(),
            serde_json::to_value(offers).unwrap_or(Value::Null),
        );
    }
    Ok(Json(json!({ "id": id, "results": Value::Object(results) })))
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
    async fn api_search_returns_summaries() {
        let response = api_search(
            State(state()),
            Query(SearchQuery {
                q: Some("haunting".to_string()),
            }),
        )
        .await
        .unwrap();

        let results = response.0.as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["title"], "The Haunting");
    }

    #[tokio::test]
    async fn api_movie_returns_region_keyed_table() {
        let response = api_movie_providers(State(state()), Path("1".to_string()))
            .await
            .unwrap();

        assert_eq!(response.0["id"], 1);
        let us = &response.0["results"]["US"];
        assert_eq!(us["flatrate"][0]["provider_name"], "Shudder");
    }

    #[tokio::test]
    async fn non_numeric_id_is_bad_request() {
        let (status, body) = api_movie_providers(State(state()), Path("abc".to_string()))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.0["error"].as_str().unwrap().contains("numeric"));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let (status, _) = api_movie_providers(State(state()), Path("99".to_string()))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
