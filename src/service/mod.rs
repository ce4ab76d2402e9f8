//! Service Front Module
//!
//! The HTTP-facing layer and the owner of "the current index".
//!
//! ## Overview
//! Exactly one index instance is published at any moment. Queries clone the
//! published `Arc` under a read lock held only for the pointer copy; a reload
//! builds a complete replacement with no lock held and swaps it in a single
//! assignment, so a query in flight always observes a whole pre- or
//! post-reload index, never a mix. A failed reload leaves the old instance
//! serving untouched.
//!
//! ## Submodules
//! - **`front`**: [`front::SearchService`] with `init`, `search`, `reload`.
//! - **`handlers`**: Axum handlers for `/search`, `/health`, `/reload`.
//! - **`protocol`**: DTOs for the non-search endpoints and error bodies.

pub mod front;
pub mod handlers;
pub mod protocol;
