//! Catalog Intake Module
//!
//! The data intake layer between the external catalog store and the index.
//!
//! ## Overview
//! This module pulls the heterogeneous catalog entities (stations, countries)
//! out of the backing store and normalizes them into the uniform [`types::Document`]
//! shape the index builder consumes. Genre documents are not stored anywhere:
//! they are synthesized here, one per distinct tag and one per distinct
//! broadcast language across all loaded stations.
//!
//! ## Responsibilities
//! - **Store access**: The [`store::CatalogStore`] trait and its SQLite
//!   implementation; the store is read-only from this service's perspective.
//! - **Normalization**: Fixed-schema documents where fields irrelevant to an
//!   entity kind are empty, never absent.
//! - **Facet derivation**: Distinct trimmed tags and languages become `genre`
//!   documents with ids drawn from one shared counter.
//! - **Defensive parsing**: A malformed per-station tag/language payload is
//!   treated as an empty list; one bad record cannot sink a whole load.
//!
//! ## Submodules
//! - **`loader`**: The full load pass producing one combined document sequence.
//! - **`store`**: Store collaborator trait, row types, and the sqlx implementation.
//! - **`types`**: The document shape shared with the index and the shaper.

pub mod loader;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
