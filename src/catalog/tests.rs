//! Catalog Module Tests
//!
//! Validates the intake pipeline: defensive JSON parsing, document
//! normalization, and genre/language facet derivation.
//!
//! ## Test Scopes
//! - **Parsing**: Malformed tag/language payloads degrade to empty lists.
//! - **Derivation**: One genre document per distinct trimmed tag/language,
//!   ids drawn from one shared counter.
//! - **Failure**: A store fetch error aborts the whole load.

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use crate::catalog::loader::{load_documents, parse_string_list};
    use crate::catalog::store::{CatalogStore, CountryRow, StationRow};
    use crate::catalog::types::DocKind;
    use crate::error::SearchError;

    struct FakeCatalog {
        stations: Vec<StationRow>,
        countries: Vec<CountryRow>,
    }

    #[async_trait]
    impl CatalogStore for FakeCatalog {
        async fn list_stations(&self) -> Result<Vec<StationRow>, SearchError> {
            Ok(self.stations.clone())
        }

        async fn list_countries(&self) -> Result<Vec<CountryRow>, SearchError> {
            Ok(self.countries.clone())
        }
    }

    struct DeadCatalog;

    #[async_trait]
    impl CatalogStore for DeadCatalog {
        async fn list_stations(&self) -> Result<Vec<StationRow>, SearchError> {
            Err(SearchError::Load("list_stations: connection refused".into()))
        }

        async fn list_countries(&self) -> Result<Vec<CountryRow>, SearchError> {
            Err(SearchError::Load("list_countries: connection refused".into()))
        }
    }

    fn station(id: &str, name: &str, tags: &str, language: &str) -> StationRow {
        StationRow {
            id: id.to_string(),
            name: name.to_string(),
            url: format!("http://stream.example/{id}"),
            country_name: "Germany".to_string(),
            country_id: "7".to_string(),
            tags: tags.to_string(),
            language: language.to_string(),
            favicon: String::new(),
        }
    }

    fn country(id: &str, name: &str, iso: &str) -> CountryRow {
        CountryRow {
            id: id.to_string(),
            name: name.to_string(),
            iso: iso.to_string(),
        }
    }

    // ============================================================
    // PARSING TESTS - parse_string_list
    // ============================================================

    #[test]
    fn test_parse_string_list_valid_array() {
        let parsed = parse_string_list(r#"["jazz","blues"]"#);
        assert_eq!(parsed, vec!["jazz".to_string(), "blues".to_string()]);
    }

    #[test]
    fn test_parse_string_list_malformed_json() {
        assert!(parse_string_list(r#"["jazz""#).is_empty());
        assert!(parse_string_list("not json at all").is_empty());
        assert!(parse_string_list("").is_empty());
    }

    #[test]
    fn test_parse_string_list_non_array_payload() {
        assert!(parse_string_list(r#"{"tag":"jazz"}"#).is_empty());
        assert!(parse_string_list("42").is_empty());
        assert!(parse_string_list(r#""jazz""#).is_empty());
    }

    #[test]
    fn test_parse_string_list_skips_non_string_elements() {
        let parsed = parse_string_list(r#"["jazz", 3, null, "rock"]"#);
        assert_eq!(parsed, vec!["jazz".to_string(), "rock".to_string()]);
    }

    // ============================================================
    // LOADER TESTS - normalization
    // ============================================================

    #[tokio::test]
    async fn test_load_malformed_tags_still_indexes_record() {
        let store = FakeCatalog {
            stations: vec![station("1", "Broken FM", "{{{", "oops")],
            countries: vec![],
        };

        let docs = load_documents(&store).await.unwrap();

        // The station loads, with both parsed fields empty.
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].name, "Broken FM");
        assert!(docs[0].tags.is_empty());
        assert!(docs[0].language.is_empty());
    }

    #[tokio::test]
    async fn test_load_fixed_schema() {
        let store = FakeCatalog {
            stations: vec![station("1", "Jazz FM", r#"["jazz"]"#, r#"["english"]"#)],
            countries: vec![country("7", "Germany", "DE")],
        };

        let docs = load_documents(&store).await.unwrap();
        let radio = docs.iter().find(|d| d.kind == DocKind::Radio).unwrap();
        let country = docs.iter().find(|d| d.kind == DocKind::Country).unwrap();

        // Inapplicable fields are present but empty, never absent.
        assert_eq!(radio.iso, "");
        assert_eq!(country.url, "");
        assert_eq!(country.country_id, "");
        assert!(country.tags.is_empty());
        assert_eq!(country.iso, "DE");
    }

    #[tokio::test]
    async fn test_load_search_content_is_lowercased_concat() {
        let store = FakeCatalog {
            stations: vec![station("1", "Jazz FM", r#"["Smooth Jazz"]"#, r#"["English"]"#)],
            countries: vec![],
        };

        let docs = load_documents(&store).await.unwrap();
        let radio = &docs[0];

        assert!(radio.search_content.contains("jazz fm"));
        assert!(radio.search_content.contains("germany"));
        assert!(radio.search_content.contains("smooth jazz"));
        assert!(radio.search_content.contains("english"));
        assert_eq!(radio.search_content, radio.search_content.to_lowercase());
    }

    // ============================================================
    // LOADER TESTS - genre derivation
    // ============================================================

    #[tokio::test]
    async fn test_load_derives_one_genre_per_distinct_tag() {
        let store = FakeCatalog {
            stations: vec![
                station("1", "One", r#"["jazz"," rock "]"#, "[]"),
                station("2", "Two", r#"["jazz","pop"]"#, "[]"),
            ],
            countries: vec![],
        };

        let docs = load_documents(&store).await.unwrap();
        let genres: Vec<_> = docs.iter().filter(|d| d.kind == DocKind::Genre).collect();

        assert_eq!(genres.len(), 3);
        for name in ["jazz", "rock", "pop"] {
            let matching: Vec<_> = genres.iter().filter(|g| g.name == name).collect();
            assert_eq!(matching.len(), 1, "expected exactly one genre '{name}'");
            assert_eq!(matching[0].tags, vec![name.to_string()]);
        }
    }

    #[tokio::test]
    async fn test_load_language_ids_continue_tag_counter() {
        let store = FakeCatalog {
            stations: vec![station(
                "1",
                "One",
                r#"["jazz","rock"]"#,
                r#"["english"]"#,
            )],
            countries: vec![],
        };

        let docs = load_documents(&store).await.unwrap();
        let genres: Vec<_> = docs.iter().filter(|d| d.kind == DocKind::Genre).collect();

        // Tags first, languages continue the same counter range.
        assert_eq!(genres[0].id, "genre_0");
        assert_eq!(genres[1].id, "genre_1");
        assert_eq!(genres[2].id, "language_2");
        assert!(genres[2].language == vec!["english".to_string()]);
        assert!(genres[2].tags.is_empty());
    }

    #[tokio::test]
    async fn test_load_shared_text_yields_disjoint_ids() {
        // "pop" as both a tag and a language must produce two documents
        // with distinct ids.
        let store = FakeCatalog {
            stations: vec![station("1", "One", r#"["pop"]"#, r#"["pop"]"#)],
            countries: vec![],
        };

        let docs = load_documents(&store).await.unwrap();
        let genres: Vec<_> = docs.iter().filter(|d| d.kind == DocKind::Genre).collect();

        assert_eq!(genres.len(), 2);
        assert_eq!(genres[0].id, "genre_0");
        assert_eq!(genres[1].id, "language_1");
        assert_eq!(genres[0].name, genres[1].name);
    }

    #[tokio::test]
    async fn test_load_ignores_blank_tags() {
        let store = FakeCatalog {
            stations: vec![station("1", "One", r#"["", "  ", "jazz"]"#, "[]")],
            countries: vec![],
        };

        let docs = load_documents(&store).await.unwrap();
        let genres: Vec<_> = docs.iter().filter(|d| d.kind == DocKind::Genre).collect();

        assert_eq!(genres.len(), 1);
        assert_eq!(genres[0].name, "jazz");
    }

    #[tokio::test]
    async fn test_load_output_order() {
        let store = FakeCatalog {
            stations: vec![station("1", "One", r#"["jazz"]"#, r#"["english"]"#)],
            countries: vec![country("7", "Germany", "DE")],
        };

        let docs = load_documents(&store).await.unwrap();
        let kinds: Vec<DocKind> = docs.iter().map(|d| d.kind).collect();

        // Stations, countries, tag genres, language genres.
        assert_eq!(
            kinds,
            vec![
                DocKind::Radio,
                DocKind::Country,
                DocKind::Genre,
                DocKind::Genre
            ]
        );
        assert_eq!(docs[2].id, "genre_0");
        assert_eq!(docs[3].id, "language_1");
    }

    // ============================================================
    // LOADER TESTS - failure
    // ============================================================

    #[tokio::test]
    async fn test_load_store_failure_aborts_whole_load() {
        let result = load_documents(&DeadCatalog).await;

        match result {
            Err(SearchError::Load(msg)) => assert!(msg.contains("list_stations")),
            other => panic!("expected load failure, got {other:?}"),
        }
    }
}
