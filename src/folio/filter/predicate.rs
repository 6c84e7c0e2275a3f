//! The per-record predicate.

use super::Criteria;
use crate::model::Record;

/// Case-insensitive substring match over a set of fields.
///
/// Returns `true` for empty `text`, otherwise `true` if any field contains the
/// lower-cased text as a contiguous substring.
pub fn text_matches<'a, I>(fields: I, text: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    if text.is_empty() {
        return true;
    }
    let needle = text.to_lowercase();
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Whether `record` belongs in the view described by `criteria`.
pub fn matches<R, C>(record: &R, criteria: &C) -> bool
where
    R: Record + ?Sized,
    C: Criteria<R> + ?Sized,
{
    record.is_listed()
        && criteria.selects(record)
        && text_matches(record.search_fields(), criteria.search_text())
}
