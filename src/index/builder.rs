use super::inverted::SearchIndex;
use crate::catalog::types::Document;
use crate::error::SearchError;

/// Build a fresh index from one load pass.
///
/// Construction is side-effect-free with respect to any published index: it
/// only ever touches the new instance. Token-less documents are kept but
/// unmatchable rather than treated as errors, so a single odd catalog row
/// cannot abort the build; the fallible signature is the seam through which
/// any future insertion failure would still abandon the whole build.
pub fn build_index(docs: Vec<Document>) -> Result<SearchIndex, SearchError> {
    let mut index = SearchIndex::new();
    for doc in docs {
        index.insert(doc);
    }
    tracing::debug!("Indexed {} documents", index.len());
    Ok(index)
}
