use std::sync::Arc;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;

use super::front::SearchService;
use super::protocol::{HealthResponse, ReloadResponse, SearchFailure};
use crate::search::types::SearchResponse;

pub const SERVICE_NAME: &str = "radio-search";

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// A missing `q` is the same as a blank one.
    #[serde(default)]
    pub q: String,
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(service): Extension<Arc<SearchService>>,
) -> Response {
    match service.search(&params.q) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            tracing::error!("Search failed for '{}': {e}", params.q);
            let failure = SearchFailure {
                error: "search_failed".to_string(),
                message: e.to_string(),
                body: SearchResponse::empty(&params.q),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(failure)).into_response()
        }
    }
}

pub async fn handle_health() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            service: SERVICE_NAME.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }),
    )
}

pub async fn handle_reload(
    Extension(service): Extension<Arc<SearchService>>,
) -> (StatusCode, Json<ReloadResponse>) {
    match service.reload().await {
        Ok(count) => (
            StatusCode::OK,
            Json(ReloadResponse {
                success: true,
                message: format!("Search index reloaded with {count} documents"),
                error: None,
            }),
        ),
        Err(e) => {
            tracing::error!("Reload failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReloadResponse {
                    success: false,
                    message: "Reload failed; previous index still serving".to_string(),
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}
