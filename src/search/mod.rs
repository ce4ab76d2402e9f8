//! Query Pipeline Module
//!
//! Everything between a trimmed query string and the JSON body the caller
//! receives.
//!
//! ## Overview
//! The engine applies the fixed query defaults (result cap, edit tolerance,
//! field boosts) against an index snapshot; the shaper partitions the raw
//! hits into the three user-facing buckets, deduplicates genre names, and
//! orders every bucket by descending score.
//!
//! ## Submodules
//! - **`engine`**: Query execution with the service's fixed defaults.
//! - **`shaper`**: Bucket partitioning, genre dedup, final ordering.
//! - **`types`**: Wire-format DTOs for the search response.

pub mod engine;
pub mod shaper;
pub mod types;
