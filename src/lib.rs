//! Radio Catalog Search Service Library
//!
//! This library crate defines the modules that make up the search service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of four loosely coupled subsystems:
//!
//! - **`catalog`**: The data intake layer. Reads stations and countries from the
//!   external catalog store and normalizes them (plus derived genre/language
//!   facets) into a uniform document shape.
//! - **`index`**: The in-memory inverted index. Tokenizes documents into
//!   postings and answers scored, edit-distance-tolerant term lookups.
//! - **`search`**: The query pipeline. Applies the engine defaults (result cap,
//!   fuzziness, field boosts) and shapes raw hits into the user-facing buckets.
//! - **`service`**: The HTTP front. Owns the single published index reference,
//!   coordinates the atomic swap on reload, and exposes the REST endpoints.

pub mod catalog;
pub mod error;
pub mod index;
pub mod search;
pub mod service;
