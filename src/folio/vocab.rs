//! Derived views over a whole store: the tag vocabulary for the blog filter bar
//! and the per-category counts for the publication tabs.
//!
//! Both are recomputed from the records on every call, so they can never go
//! stale after a store is replaced.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::model::{Post, Publication, PublicationKind};
use crate::query::CategorySelection;

/// Every tag used by any post in `posts`, sorted and deduplicated.
///
/// Unpublished posts contribute their tags too: the vocabulary describes the
/// store, not a filtered view.
pub fn tag_vocabulary<'a, I>(posts: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Post>,
{
    posts
        .into_iter()
        .flat_map(|post| post.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Badge counts for the publication tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub all: usize,
    pub journal: usize,
    pub conference: usize,
    pub preprint: usize,
}

impl CategoryCounts {
    pub fn tally<'a, I>(publications: I) -> Self
    where
        I: IntoIterator<Item = &'a Publication>,
    {
        publications
            .into_iter()
            .fold(Self::default(), |mut counts, publication| {
                counts.all += 1;
                match publication.kind {
                    PublicationKind::Journal => counts.journal += 1,
                    PublicationKind::Conference => counts.conference += 1,
                    PublicationKind::Preprint => counts.preprint += 1,
                }
                counts
            })
    }

    pub fn get(&self, selection: CategorySelection) -> usize {
        match selection {
            CategorySelection::All => self.all,
            CategorySelection::Only(PublicationKind::Journal) => self.journal,
            CategorySelection::Only(PublicationKind::Conference) => self.conference,
            CategorySelection::Only(PublicationKind::Preprint) => self.preprint,
        }
    }

    /// (tab, count) pairs in tab order.
    pub fn tabs(&self) -> Vec<(CategorySelection, usize)> {
        CategorySelection::tabs()
            .into_iter()
            .map(|tab| (tab, self.get(tab)))
            .collect()
    }
}
