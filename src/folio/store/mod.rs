//! # Storage Layer
//!
//! A [`RecordStore`] is the fixed, ordered collection a listing filters. It is
//! populated once when a view activates and is immutable afterwards, with one
//! exception: a publication sync may replace it wholesale via
//! [`RecordStore::replace`].
//!
//! ## Invariants
//!
//! Checked when a store is built or replaced, never later:
//! - No two records share a key ([`crate::model::Record::key`]).
//! - Every record passes its own [`crate::model::Record::validate`] (e.g. post ids
//!   are URL-safe).
//!
//! A failed check is a [`FolioError::DuplicateKey`] or
//! [`FolioError::MalformedRecord`], and a failed `replace` leaves the store as it
//! was. There is no partially applied replacement.
//!
//! ## Sources
//!
//! - [`seed`]: the built-in blog posts and fallback publications.
//! - [`file`]: JSON collections on disk, same shape as the seed data.

pub mod file;
pub mod seed;

use std::collections::HashSet;

use crate::error::{FolioError, Result};
use crate::model::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> RecordStore<R> {
    /// Builds a store, rejecting duplicate keys and malformed records.
    pub fn new(records: Vec<R>) -> Result<Self> {
        validate_records(&records)?;
        Ok(Self { records })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Swaps in a new collection. On error the current records are kept.
    pub fn replace(&mut self, records: Vec<R>) -> Result<()> {
        validate_records(&records)?;
        tracing::debug!(
            previous = self.records.len(),
            current = records.len(),
            "replaced record store"
        );
        self.records = records;
        Ok(())
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks a record up by key.
    pub fn get(&self, key: &str) -> Option<&R> {
        self.records.iter().find(|r| r.key() == key)
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

impl<'a, R> IntoIterator for &'a RecordStore<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn validate_records<R: Record>(records: &[R]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        record.validate()?;
        if !seen.insert(record.key()) {
            tracing::warn!(key = record.key(), "duplicate record key");
            return Err(FolioError::DuplicateKey(record.key().to_string()));
        }
    }
    Ok(())
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{Post, Publication, PublicationKind};
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
    }

    /// Five posts, newest first; `draft-notes` is unpublished.
    pub fn sample_posts() -> Vec<Post> {
        vec![
            Post::new(
                "nextflow-modules",
                "Nextflow DSL2 modules",
                "Patterns for reproducible RNA-seq workflows",
                day(2024, 1, 15),
            )
            .with_read_time("8 min read")
            .with_tags(["nextflow", "rna-seq", "reproducibility"]),
            Post::new(
                "conda-hell",
                "Solving Conda dependency hell",
                "When to switch to Mamba",
                day(2024, 1, 8),
            )
            .with_read_time("6 min read")
            .with_tags(["conda", "mamba", "troubleshooting"]),
            Post::new(
                "docker-tools",
                "Dockerizing bioinformatics tools",
                "Layer caching and multi-arch builds",
                day(2024, 1, 1),
            )
            .with_read_time("12 min read")
            .with_tags(["docker", "containers", "reproducibility"]),
            Post::new(
                "draft-notes",
                "Draft: docker notes",
                "Not ready yet",
                day(2023, 12, 30),
            )
            .with_tags(["docker", "draft"])
            .unpublished(),
            Post::new(
                "variant-calling",
                "Variant calling pitfalls",
                "Joint genotyping and filtering",
                day(2023, 12, 20),
            )
            .with_read_time("10 min read")
            .with_tags(["gatk", "filtering"]),
        ]
    }

    /// The three-record publication store: A (2024 journal), B (2023
    /// conference), C (2024 preprint).
    pub fn scenario_publications() -> Vec<Publication> {
        vec![
            Publication::new("A", "Journal of A", 2024, PublicationKind::Journal)
                .with_authors(["Ada Author"])
                .with_bibtex("@article{a2024,\n  title={A}\n}"),
            Publication::new("B", "Conference of B", 2023, PublicationKind::Conference)
                .with_authors(["Bo Writer", "Ada Author"]),
            Publication::new("C", "arXiv", 2024, PublicationKind::Preprint)
                .with_authors(["Cy Scholar"])
                .with_bibtex("@article{c2024,\n  title={C}\n}"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{sample_posts, scenario_publications};
    use super::*;
    use crate::model::{Post, Publication, PublicationKind};

    #[test]
    fn test_new_keeps_order() {
        let store = RecordStore::new(sample_posts()).unwrap();
        let ids: Vec<&str> = store.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "nextflow-modules",
                "conda-hell",
                "docker-tools",
                "draft-notes",
                "variant-calling"
            ]
        );
    }

    #[test]
    fn test_duplicate_post_id_rejected() {
        let mut posts = sample_posts();
        posts.push(posts[0].clone());
        match RecordStore::new(posts) {
            Err(FolioError::DuplicateKey(key)) => assert_eq!(key, "nextflow-modules"),
            other => panic!("Expected DuplicateKey, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_publication_title_rejected() {
        let mut pubs = scenario_publications();
        pubs.push(Publication::new("A", "Elsewhere", 2020, PublicationKind::Preprint));
        assert!(matches!(
            RecordStore::new(pubs),
            Err(FolioError::DuplicateKey(_))
        ));
    }

    #[test]
    fn test_malformed_post_id_rejected() {
        let mut posts = sample_posts();
        posts[1].id = "conda hell".to_string();
        let err = RecordStore::new(posts).unwrap_err();
        assert!(matches!(err, FolioError::MalformedRecord(_)));
        assert!(err.is_malformed());
    }

    #[test]
    fn test_replace_swaps_wholesale() {
        let mut store = RecordStore::new(scenario_publications()).unwrap();
        let replacement = vec![Publication::new("Z", "V", 2025, PublicationKind::Journal)];
        store.replace(replacement).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.get("Z").is_some());
        assert!(store.get("A").is_none());
    }

    #[test]
    fn test_failed_replace_leaves_store_untouched() {
        let mut store = RecordStore::new(scenario_publications()).unwrap();
        let before = store.clone();
        let bad = vec![
            Publication::new("Z", "V", 2025, PublicationKind::Journal),
            Publication::new("Z", "W", 2024, PublicationKind::Journal),
        ];
        assert!(store.replace(bad).is_err());
        assert_eq!(store, before);
    }

    #[test]
    fn test_get_by_key() {
        let store = RecordStore::new(sample_posts()).unwrap();
        assert_eq!(
            store.get("docker-tools").map(|p| p.title.as_str()),
            Some("Dockerizing bioinformatics tools")
        );
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_empty_store() {
        let store: RecordStore<Post> = RecordStore::empty();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.records().is_empty());
    }
}
