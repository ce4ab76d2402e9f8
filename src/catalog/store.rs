use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::error::SearchError;

/// Raw station row as the catalog store returns it.
///
/// `tags` and `language` are serialized JSON arrays and may be malformed;
/// the loader parses them defensively.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StationRow {
    pub id: String,
    pub name: String,
    pub url: String,
    pub country_name: String,
    pub country_id: String,
    pub tags: String,
    pub language: String,
    pub favicon: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CountryRow {
    pub id: String,
    pub name: String,
    pub iso: String,
}

/// Read-only view of the external catalog.
///
/// The search service never writes through this interface; the index is a
/// pure projection of whatever these two listings return at load time.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All non-deleted stations, with the country name already resolved.
    async fn list_stations(&self) -> Result<Vec<StationRow>, SearchError>;

    /// All non-deleted countries.
    async fn list_countries(&self) -> Result<Vec<CountryRow>, SearchError>;
}

/// sqlx-backed implementation over the application's SQLite database.
pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalog {
    async fn list_stations(&self) -> Result<Vec<StationRow>, SearchError> {
        sqlx::query_as::<_, StationRow>(
            r#"
            SELECT CAST(r.id AS TEXT) AS id,
                   r.name,
                   COALESCE(r.url, '') AS url,
                   COALESCE(c.name, '') AS country_name,
                   CAST(COALESCE(r.country_id, '') AS TEXT) AS country_id,
                   COALESCE(r.tags, '') AS tags,
                   COALESCE(r.language, '') AS language,
                   COALESCE(r.favicon, '') AS favicon
            FROM radios r
            LEFT JOIN countries c ON c.id = r.country_id
            WHERE r.deleted = 0
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| SearchError::Load(format!("list_stations: {e}")))
    }

    async fn list_countries(&self) -> Result<Vec<CountryRow>, SearchError> {
        sqlx::query_as::<_, CountryRow>(
            r#"
            SELECT CAST(id AS TEXT) AS id,
                   name,
                   COALESCE(iso, '') AS iso
            FROM countries
            WHERE deleted = 0
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| SearchError::Load(format!("list_countries: {e}")))
    }
}
