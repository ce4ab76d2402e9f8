use std::sync::{Arc, PoisonError, RwLock};

use crate::catalog::loader::load_documents;
use crate::catalog::store::CatalogStore;
use crate::error::SearchError;
use crate::index::builder::build_index;
use crate::index::inverted::SearchIndex;
use crate::search::engine::run_query;
use crate::search::shaper::shape_results;
use crate::search::types::SearchResponse;

/// Owner of the single published index reference.
///
/// The lock guards only the `Arc` assignment and the pointer copy; neither a
/// rebuild nor a query ever runs under it, so readers never wait on a reload
/// and a reload never waits on readers beyond the swap instant.
pub struct SearchService {
    store: Arc<dyn CatalogStore>,
    current: RwLock<Arc<SearchIndex>>,
}

impl SearchService {
    /// Initial load and build. A failure here means the process must not
    /// serve: no index has ever been published.
    pub async fn init(store: Arc<dyn CatalogStore>) -> Result<Self, SearchError> {
        let docs = load_documents(store.as_ref()).await?;
        let index = build_index(docs)?;
        tracing::info!("Search index ready with {} documents", index.len());
        Ok(Self {
            store,
            current: RwLock::new(Arc::new(index)),
        })
    }

    /// The currently published index snapshot.
    pub fn snapshot(&self) -> Arc<SearchIndex> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Rebuild from the store and publish the replacement.
    ///
    /// The load and build run on a private instance with no lock held. On
    /// failure the previously published index keeps serving exactly as it
    /// was before the reload began.
    pub async fn reload(&self) -> Result<usize, SearchError> {
        let docs = load_documents(self.store.as_ref()).await?;
        let index = build_index(docs)?;
        let count = index.len();

        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Arc::new(index);
        drop(current);

        tracing::info!("Reloaded search index with {count} documents");
        Ok(count)
    }

    /// Answer one query against whatever index is currently published.
    ///
    /// Blank queries short-circuit to the canonical empty response without
    /// touching the index at all.
    pub fn search(&self, raw_query: &str) -> Result<SearchResponse, SearchError> {
        let query = raw_query.trim();
        if query.is_empty() {
            return Ok(SearchResponse::empty(""));
        }

        let index = self.snapshot();
        let outcome = run_query(&index, query)?;
        shape_results(&index, &outcome.hits, query, outcome.elapsed_ms)
    }
}
