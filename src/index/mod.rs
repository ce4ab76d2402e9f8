//! In-Memory Index Module
//!
//! The core data structure of the service: a tokenized, field-aware inverted
//! index over one loaded catalog snapshot.
//!
//! ## Overview
//! Documents are tokenized on their text fields (`name`, `tags`, `language`,
//! `search_content`) into postings; the categorical fields (`kind`, `country`,
//! `country_id`, `iso`) ride along on the stored document and never score.
//! An index is immutable once built, so concurrent queries need no locking.
//!
//! ## Submodules
//! - **`builder`**: Turns a document sequence into one fresh index instance.
//! - **`inverted`**: The index itself plus scored, fuzzy-tolerant lookup.
//! - **`tokenizer`**: Text normalization shared by indexing and querying.

pub mod builder;
pub mod inverted;
pub mod tokenizer;
