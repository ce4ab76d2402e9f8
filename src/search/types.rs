use serde::{Deserialize, Serialize};

/// A station hit as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioHit {
    pub id: String,
    pub name: String,
    pub url: String,
    pub country: String,
    pub country_id: String,
    pub tags: Vec<String>,
    pub language: Vec<String>,
    pub favicon: String,
    pub score: f32,
}

/// A country hit as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryHit {
    pub id: String,
    pub name: String,
    pub iso: String,
    pub score: f32,
}

/// The shaped response for `GET /search`.
///
/// `genres` carries bare names: scores are dropped from that bucket after
/// dedup and ordering. `total` counts raw hits before dedup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub radios: Vec<RadioHit>,
    pub countries: Vec<CountryHit>,
    pub genres: Vec<String>,
    pub total: usize,
    pub query: String,
    pub search_time: String,
}

impl SearchResponse {
    /// Canonical empty response, served without touching the index.
    pub fn empty(query: &str) -> Self {
        Self {
            radios: Vec::new(),
            countries: Vec::new(),
            genres: Vec::new(),
            total: 0,
            query: query.to_string(),
            search_time: "0.0ms".to_string(),
        }
    }
}
