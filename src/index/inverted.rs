use std::cmp::Ordering;
use std::collections::HashMap;

use rapidfuzz::distance::levenshtein;

use super::tokenizer::tokenize;
use crate::catalog::types::Document;

/// Which text field a posting came from; decides its boost at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Tags,
    Language,
    Content,
}

/// Per-field score multipliers applied at query time.
#[derive(Debug, Clone, Copy)]
pub struct Boosts {
    pub name: f32,
    pub tags: f32,
    pub language: f32,
    pub content: f32,
}

impl Default for Boosts {
    fn default() -> Self {
        Self {
            name: 2.0,
            tags: 1.0,
            language: 1.0,
            content: 1.5,
        }
    }
}

impl Boosts {
    fn for_field(&self, field: Field) -> f32 {
        match field {
            Field::Name => self.name,
            Field::Tags => self.tags,
            Field::Language => self.language,
            Field::Content => self.content,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Posting {
    doc: usize,
    field: Field,
    count: u32,
}

/// A raw scored hit; `doc` indexes into the owning [`SearchIndex`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub doc: usize,
    pub score: f32,
}

/// Weight discount for terms reached through the edit tolerance instead of
/// an exact vocabulary match.
const FUZZY_WEIGHT: f32 = 0.5;

/// Inverted index over one catalog snapshot.
///
/// Immutable after construction: readers share it freely behind an `Arc`
/// while a replacement instance is built elsewhere.
pub struct SearchIndex {
    docs: Vec<Document>,
    postings: HashMap<String, Vec<Posting>>,
}

impl SearchIndex {
    pub(crate) fn new() -> Self {
        Self {
            docs: Vec::new(),
            postings: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// The stored document behind a hit, if the index actually holds it.
    pub fn doc(&self, idx: usize) -> Option<&Document> {
        self.docs.get(idx)
    }

    /// Tokenize and insert one document.
    ///
    /// A document whose text fields produce no tokens at all is kept but
    /// contributes no postings: it can never match a query, yet it must not
    /// sink the build, or one odd catalog row would take down every reload.
    pub(crate) fn insert(&mut self, doc: Document) {
        let idx = self.docs.len();
        let mut counts: HashMap<(String, Field), u32> = HashMap::new();

        add_terms(&mut counts, Field::Name, &doc.name);
        for tag in &doc.tags {
            add_terms(&mut counts, Field::Tags, tag);
        }
        for language in &doc.language {
            add_terms(&mut counts, Field::Language, language);
        }
        add_terms(&mut counts, Field::Content, &doc.search_content);

        if counts.is_empty() {
            tracing::warn!(
                "Document {:?} '{}' has no indexable text; kept but unmatchable",
                doc.kind,
                doc.id
            );
        }

        for ((term, field), count) in counts {
            self.postings
                .entry(term)
                .or_default()
                .push(Posting { doc: idx, field, count });
        }
        self.docs.push(doc);
    }

    /// Score every document matching `tokens` within `max_distance` edits.
    ///
    /// An exact vocabulary match contributes at full weight, a fuzzy match at
    /// [`FUZZY_WEIGHT`]; each posting contributes weight x field boost x term
    /// count. Hits come back best-first (score descending, insertion order as
    /// the tie-break so a fixed catalog always yields a fixed ordering),
    /// truncated to `limit`.
    pub fn query(
        &self,
        tokens: &[String],
        boosts: Boosts,
        max_distance: usize,
        limit: usize,
    ) -> Vec<Hit> {
        let mut scores: HashMap<usize, f32> = HashMap::new();

        for token in tokens {
            for (term, postings) in &self.postings {
                let weight = if term == token {
                    1.0
                } else if within_distance(token, term, max_distance) {
                    FUZZY_WEIGHT
                } else {
                    continue;
                };

                for posting in postings {
                    *scores.entry(posting.doc).or_insert(0.0) +=
                        weight * boosts.for_field(posting.field) * posting.count as f32;
                }
            }
        }

        let mut hits: Vec<Hit> = scores
            .into_iter()
            .map(|(doc, score)| Hit { doc, score })
            .collect();
        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.doc.cmp(&b.doc))
        });
        hits.truncate(limit);
        hits
    }
}

fn add_terms(counts: &mut HashMap<(String, Field), u32>, field: Field, text: &str) {
    for token in tokenize(text) {
        *counts.entry((token, field)).or_insert(0) += 1;
    }
}

fn within_distance(query: &str, term: &str, max_distance: usize) -> bool {
    // Cheap length prefilter before the scan hits the edit-distance kernel.
    // Counted in chars, not bytes: a one-char edit in a multibyte script
    // shifts the byte length by more than one.
    if query.chars().count().abs_diff(term.chars().count()) > max_distance {
        return false;
    }
    levenshtein::distance(query.chars(), term.chars()) <= max_distance
}
