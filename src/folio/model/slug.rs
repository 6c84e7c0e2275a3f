//! Post identifier validation.
//!
//! Post ids double as URL path segments (`/blog/{id}`), so they are restricted to:
//! - ASCII alphanumeric characters, underscores (`_`), and hyphens (`-`)
//! - Must start and end with an alphanumeric character

use thiserror::Error;

/// Validates a post id.
///
/// # Examples
/// ```
/// use folio::model::slug::validate_slug;
///
/// assert!(validate_slug("nextflow-dsl2-modules").is_ok());
/// assert!(validate_slug("2024_recap").is_ok());
///
/// assert!(validate_slug("").is_err());
/// assert!(validate_slug("-draft").is_err());
/// assert!(validate_slug("draft-").is_err());
/// assert!(validate_slug("with space").is_err());
/// assert!(validate_slug("a/b").is_err());
/// ```
pub fn validate_slug(slug: &str) -> Result<(), SlugError> {
    let Some(first) = slug.chars().next() else {
        return Err(SlugError::Empty);
    };
    if !first.is_ascii_alphanumeric() {
        return Err(SlugError::InvalidStart(first));
    }

    if let Some(ch) = slug.chars().find(|ch| !is_slug_char(*ch)) {
        return Err(SlugError::InvalidCharacter(ch));
    }

    if slug.ends_with(['-', '_']) {
        return Err(SlugError::InvalidEnd);
    }

    Ok(())
}

fn is_slug_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("post id cannot be empty")]
    Empty,
    #[error("post id must start with a letter or digit, found '{0}'")]
    InvalidStart(char),
    #[error("post id cannot end with a hyphen or underscore")]
    InvalidEnd,
    #[error("post id contains invalid character '{0}' (only alphanumeric, underscore, and hyphen allowed)")]
    InvalidCharacter(char),
}
