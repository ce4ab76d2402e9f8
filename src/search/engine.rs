use std::time::Instant;

use crate::error::SearchError;
use crate::index::inverted::{Boosts, Hit, SearchIndex};
use crate::index::tokenizer::tokenize;

/// Hard cap on raw hits returned per query.
pub const RESULT_LIMIT: usize = 50;
/// Edit-distance tolerance for vocabulary matching.
pub const FUZZY_DISTANCE: usize = 1;

/// Raw engine output before shaping.
#[derive(Debug)]
pub struct QueryOutcome {
    pub hits: Vec<Hit>,
    pub elapsed_ms: f64,
}

/// Run one free-text query against an index snapshot.
///
/// The service front has already rejected blank queries; a query that still
/// tokenizes to nothing (punctuation only) legitimately matches nothing.
pub fn run_query(index: &SearchIndex, query: &str) -> Result<QueryOutcome, SearchError> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return Ok(QueryOutcome {
            hits: Vec::new(),
            elapsed_ms: 0.0,
        });
    }

    let started = Instant::now();
    let hits = index.query(&tokens, Boosts::default(), FUZZY_DISTANCE, RESULT_LIMIT);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    tracing::debug!(
        "Query '{}' matched {} documents in {:.1}ms",
        query,
        hits.len(),
        elapsed_ms
    );
    Ok(QueryOutcome { hits, elapsed_ms })
}
