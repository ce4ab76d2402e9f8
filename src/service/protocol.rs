//! Service HTTP Protocol
//!
//! DTOs for the non-search endpoints and for failure bodies. Serialized as
//! JSON by the Axum handlers.

use serde::{Deserialize, Serialize};

use crate::search::types::SearchResponse;

/// Liveness payload for `GET /health`. Independent of index state.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    /// RFC 3339 / ISO 8601 timestamp of the response.
    pub timestamp: String,
}

/// Outcome of a `POST /reload`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub success: bool,
    pub message: String,
    /// Present only on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body served with a 500 on a failed search: the error context plus the
/// empty buckets, never a partially populated 200.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchFailure {
    pub error: String,
    pub message: String,
    #[serde(flatten)]
    pub body: SearchResponse,
}
