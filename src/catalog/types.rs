use serde::{Deserialize, Serialize};

/// Discriminant for the three entity families held in one index.
///
/// Identity is composite: document ids are unique within a kind, not across
/// kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocKind {
    Radio,
    Country,
    Genre,
}

/// The unit of indexing.
///
/// One fixed schema for every entity family: fields that do not apply to a
/// kind are empty strings or empty lists, never absent, so nothing downstream
/// has to reason about missing columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub kind: DocKind,
    pub url: String,
    pub country: String,
    pub country_id: String,
    pub favicon: String,
    pub iso: String,
    /// For a tag-derived genre document: exactly that one tag.
    pub tags: Vec<String>,
    /// For a language-derived genre document: exactly that one language.
    pub language: Vec<String>,
    /// Lowercased concatenation of name, country, tags and languages.
    /// Broadens recall only; never shown to the user.
    pub search_content: String,
}
