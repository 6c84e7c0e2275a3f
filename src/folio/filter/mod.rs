//! # Filtering
//!
//! One filter pipeline serves both listings. It is parameterized by two strategies:
//!
//! - the record type, through [`Record`]: which fields are searchable, and whether
//!   the record is listed at all (unpublished posts are not);
//! - the query type, through [`Criteria`]: the search text, and the categorical
//!   selection (a tag set for posts, a category for publications).
//!
//! A record is included iff it is listed AND its fields match the search text AND
//! the query's selection admits it. See [`predicate::matches`].
//!
//! ## Text Matching
//!
//! Case-insensitive substring match. A record matches when *any* of its searchable
//! fields contains the lower-cased search text. Empty search text matches every
//! record.
//!
//! ## Pipeline Contract
//!
//! [`pipeline::filter`] is stable (keeps the input's relative order), idempotent,
//! and total: it never fails, whatever the query.

pub mod pipeline;
pub mod predicate;

pub use crate::model::Record;
pub use pipeline::{count, filter};
pub use predicate::{matches, text_matches};

/// The query side of the filter strategy.
pub trait Criteria<R: ?Sized> {
    /// Raw search text, exactly as the user typed it.
    fn search_text(&self) -> &str;

    /// Categorical selection (tags, category). Must be pure.
    fn selects(&self, record: &R) -> bool;
}
