use std::cmp::Ordering;
use std::collections::HashMap;

use super::types::{CountryHit, RadioHit, SearchResponse};
use crate::catalog::types::DocKind;
use crate::error::SearchError;
use crate::index::inverted::{Hit, SearchIndex};

/// Partition raw hits into the user-facing buckets.
///
/// Genre names are deduplicated by map insertion, so when a tag-derived and
/// a language-derived document share a name the LAST hit encountered wins,
/// score included, even when the earlier one scored higher. Downstream
/// clients have always seen that behavior; changing it to best-wins would
/// reorder existing genre buckets.
pub fn shape_results(
    index: &SearchIndex,
    hits: &[Hit],
    query: &str,
    elapsed_ms: f64,
) -> Result<SearchResponse, SearchError> {
    let mut radios: Vec<RadioHit> = Vec::new();
    let mut countries: Vec<CountryHit> = Vec::new();
    let mut genre_scores: HashMap<String, f32> = HashMap::new();

    for hit in hits {
        let doc = index.doc(hit.doc).ok_or_else(|| {
            SearchError::Query(format!("hit references missing document {}", hit.doc))
        })?;

        match doc.kind {
            DocKind::Radio => radios.push(RadioHit {
                id: doc.id.clone(),
                name: doc.name.clone(),
                url: doc.url.clone(),
                country: doc.country.clone(),
                country_id: doc.country_id.clone(),
                tags: doc.tags.clone(),
                language: doc.language.clone(),
                favicon: doc.favicon.clone(),
                score: hit.score,
            }),
            DocKind::Country => countries.push(CountryHit {
                id: doc.id.clone(),
                name: doc.name.clone(),
                iso: doc.iso.clone(),
                score: hit.score,
            }),
            DocKind::Genre => {
                genre_scores.insert(doc.name.clone(), hit.score);
            }
        }
    }

    radios.sort_by(|a, b| by_score_desc(a.score, b.score));
    countries.sort_by(|a, b| by_score_desc(a.score, b.score));

    let mut genres: Vec<(String, f32)> = genre_scores.into_iter().collect();
    genres.sort_by(|a, b| by_score_desc(a.1, b.1).then_with(|| a.0.cmp(&b.0)));
    let genres = genres.into_iter().map(|(name, _)| name).collect();

    Ok(SearchResponse {
        radios,
        countries,
        genres,
        total: hits.len(),
        query: query.to_string(),
        search_time: format!("{elapsed_ms:.1}ms"),
    })
}

fn by_score_desc(a: f32, b: f32) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
