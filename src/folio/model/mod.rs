//! # Domain Model
//!
//! The two record kinds that folio filters: blog [`Post`]s and [`Publication`]s.
//!
//! Records are plain data. They are loaded once per view (from the built-in seed
//! collections, a JSON file, or a publication sync) and never mutated while a
//! filtering session is running.
//!
//! ## Keys
//!
//! Every record exposes a stable key used for list rendering and for duplicate
//! detection in the [`crate::store::RecordStore`]:
//!
//! - Posts are keyed by their `id`, a URL-safe slug (see [`slug`]).
//! - Publications have no identifier of their own and are keyed by title.
//!
//! ## Wire Shape
//!
//! The serde representation mirrors the JSON shape the site data uses
//! (`readTime`, `type`, `abstract`), so a posts or publications file can be
//! dropped in place of the built-in collections.

pub mod slug;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FolioError;

pub use slug::{validate_slug, SlugError};

/// Number of tags shown on a listing card before collapsing into "+N more".
pub const TAG_PREVIEW_LIMIT: usize = 3;

const DOI_RESOLVER: &str = "https://doi.org/";

fn default_published() -> bool {
    true
}

/// A blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub date: NaiveDate,
    /// Free-text duration label, e.g. "8 min read".
    pub read_time: String,
    /// Case-sensitive tags in authoring order.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_published")]
    pub published: bool,
}

impl Post {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        excerpt: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            excerpt: excerpt.into(),
            content: None,
            date,
            read_time: String::new(),
            tags: Vec::new(),
            published: true,
        }
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_read_time(mut self, read_time: impl Into<String>) -> Self {
        self.read_time = read_time.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn unpublished(mut self) -> Self {
        self.published = false;
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Site path of the post page.
    pub fn path(&self) -> String {
        format!("/blog/{}", self.id)
    }

    /// The tags a listing card shows, plus how many were left out.
    pub fn tag_preview(&self) -> TagPreview<'_> {
        let shown = &self.tags[..self.tags.len().min(TAG_PREVIEW_LIMIT)];
        TagPreview {
            shown,
            hidden: self.tags.len() - shown.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagPreview<'a> {
    pub shown: &'a [String],
    pub hidden: usize,
}

impl TagPreview<'_> {
    /// "+N more" badge text, if any tags were collapsed.
    pub fn more_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more", self.hidden))
    }
}

/// The closed set of publication categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationKind {
    Journal,
    Conference,
    Preprint,
}

impl PublicationKind {
    /// All kinds in tab order.
    pub const ALL: [PublicationKind; 3] = [
        PublicationKind::Journal,
        PublicationKind::Conference,
        PublicationKind::Preprint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PublicationKind::Journal => "journal",
            PublicationKind::Conference => "conference",
            PublicationKind::Preprint => "preprint",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PublicationKind::Journal => "Journal",
            PublicationKind::Conference => "Conference",
            PublicationKind::Preprint => "Preprint",
        }
    }
}

impl fmt::Display for PublicationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PublicationKind {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "journal" => Ok(PublicationKind::Journal),
            "conference" => Ok(PublicationKind::Conference),
            "preprint" => Ok(PublicationKind::Preprint),
            other => Err(FolioError::Api(format!(
                "Unknown publication type '{}' (expected journal, conference or preprint)",
                other
            ))),
        }
    }
}

/// A research publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    /// Authors in authorship order.
    pub authors: Vec<String>,
    pub venue: String,
    /// Required by grouping; a record without one is malformed.
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(rename = "type")]
    pub kind: PublicationKind,
    #[serde(default, rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Pre-rendered BibTeX entry, exported verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bibtex: Option<String>,
}

impl Publication {
    pub fn new(
        title: impl Into<String>,
        venue: impl Into<String>,
        year: i32,
        kind: PublicationKind,
    ) -> Self {
        Self {
            title: title.into(),
            authors: Vec::new(),
            venue: venue.into(),
            year: Some(year),
            doi: None,
            kind,
            summary: None,
            bibtex: None,
        }
    }

    pub fn with_authors<I, T>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = Some(doi.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_bibtex(mut self, bibtex: impl Into<String>) -> Self {
        self.bibtex = Some(bibtex.into());
        self
    }

    /// Resolver link for the DOI, if the publication has one.
    pub fn doi_url(&self) -> Option<String> {
        self.doi.as_ref().map(|doi| format!("{}{}", DOI_RESOLVER, doi))
    }

    /// The publication year, or `MalformedRecord` when it is missing.
    pub fn require_year(&self) -> crate::error::Result<i32> {
        self.year.ok_or_else(|| {
            FolioError::MalformedRecord(format!("publication '{}' has no year", self.title))
        })
    }

    pub fn author_line(&self) -> String {
        self.authors.join(", ")
    }
}

/// What the store and the filter pipeline need to know about a record type.
pub trait Record {
    /// Stable key, unique within a store.
    fn key(&self) -> &str;

    /// Fields the free-text search looks at, in no particular order.
    fn search_fields(&self) -> Vec<&str>;

    /// Records that are not listed never appear in any derived view.
    fn is_listed(&self) -> bool {
        true
    }

    /// Per-record invariants checked when a store is built.
    fn validate(&self) -> crate::error::Result<()> {
        Ok(())
    }
}

impl Record for Post {
    fn key(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(2 + self.tags.len());
        fields.push(self.title.as_str());
        fields.push(self.excerpt.as_str());
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn is_listed(&self) -> bool {
        self.published
    }

    fn validate(&self) -> crate::error::Result<()> {
        validate_slug(&self.id).map_err(|e| {
            FolioError::MalformedRecord(format!("post '{}': {}", self.id, e))
        })
    }
}

impl Record for Publication {
    fn key(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(2 + self.authors.len());
        fields.push(self.title.as_str());
        fields.extend(self.authors.iter().map(String::as_str));
        fields.push(self.venue.as_str());
        fields
    }
}
