use std::collections::HashSet;

use super::store::CatalogStore;
use super::types::{DocKind, Document};
use crate::error::SearchError;

/// Parse a serialized JSON array of strings.
///
/// Malformed payloads and non-array shapes yield an empty list so one bad
/// record cannot sink a whole load; non-string elements are skipped.
pub fn parse_string_list(raw: &str) -> Vec<String> {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Synthesized low-signal text for recall. Never shown to the user.
fn search_content(name: &str, country: &str, tags: &[String], languages: &[String]) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(2 + tags.len() + languages.len());
    parts.push(name);
    if !country.is_empty() {
        parts.push(country);
    }
    parts.extend(tags.iter().map(String::as_str));
    parts.extend(languages.iter().map(String::as_str));
    parts.join(" ").to_lowercase()
}

fn genre_document(id: String, name: &str, tags: Vec<String>, language: Vec<String>) -> Document {
    Document {
        id,
        name: name.to_string(),
        kind: DocKind::Genre,
        url: String::new(),
        country: String::new(),
        country_id: String::new(),
        favicon: String::new(),
        iso: String::new(),
        tags,
        language,
        search_content: name.to_lowercase(),
    }
}

/// One full load pass over the catalog store.
///
/// Produces stations, then countries, then the genre documents derived from
/// distinct trimmed tags and languages (in first-encounter order, so the
/// derived ids are stable for a given catalog). Any store fetch error aborts
/// the whole load; partial catalogs are never indexed.
pub async fn load_documents(store: &dyn CatalogStore) -> Result<Vec<Document>, SearchError> {
    let stations = store.list_stations().await?;
    let countries = store.list_countries().await?;

    let mut docs = Vec::with_capacity(stations.len() + countries.len());

    let mut seen_tags: HashSet<String> = HashSet::new();
    let mut distinct_tags: Vec<String> = Vec::new();
    let mut seen_languages: HashSet<String> = HashSet::new();
    let mut distinct_languages: Vec<String> = Vec::new();

    for station in stations {
        let tags = parse_string_list(&station.tags);
        let languages = parse_string_list(&station.language);

        for tag in &tags {
            let trimmed = tag.trim();
            if !trimmed.is_empty() && seen_tags.insert(trimmed.to_string()) {
                distinct_tags.push(trimmed.to_string());
            }
        }
        for language in &languages {
            let trimmed = language.trim();
            if !trimmed.is_empty() && seen_languages.insert(trimmed.to_string()) {
                distinct_languages.push(trimmed.to_string());
            }
        }

        docs.push(Document {
            search_content: search_content(
                &station.name,
                &station.country_name,
                &tags,
                &languages,
            ),
            id: station.id,
            name: station.name,
            kind: DocKind::Radio,
            url: station.url,
            country: station.country_name,
            country_id: station.country_id,
            favicon: station.favicon,
            iso: String::new(),
            tags,
            language: languages,
        });
    }

    for country in countries {
        docs.push(Document {
            search_content: country.name.to_lowercase(),
            id: country.id,
            name: country.name,
            kind: DocKind::Country,
            url: String::new(),
            country: String::new(),
            country_id: String::new(),
            favicon: String::new(),
            iso: country.iso,
            tags: Vec::new(),
            language: Vec::new(),
        });
    }

    // Tag- and language-derived ids draw from one shared counter, so the two
    // namespaces cannot collide even when a tag and a language carry the
    // same text.
    let mut next_id = 0usize;
    for tag in distinct_tags {
        docs.push(genre_document(
            format!("genre_{next_id}"),
            &tag,
            vec![tag.clone()],
            Vec::new(),
        ));
        next_id += 1;
    }
    for language in distinct_languages {
        docs.push(genre_document(
            format!("language_{next_id}"),
            &language,
            Vec::new(),
            vec![language.clone()],
        ));
        next_id += 1;
    }

    tracing::info!("Loaded {} documents from catalog", docs.len());
    Ok(docs)
}
