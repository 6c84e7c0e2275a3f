//! # Query State
//!
//! The small piece of mutable state a listing keeps between renders: the search
//! text and the current selection. It is created empty when a view activates and
//! changes only through the transitions below.
//!
//! | Transition          | Posts | Publications | Effect                              |
//! |---------------------|-------|--------------|-------------------------------------|
//! | `set_search_text`   | yes   | yes          | Replace search text verbatim        |
//! | `toggle_tag`        | yes   |              | Add if absent, remove if present    |
//! | `select_category`   |       | yes          | Replace the single selected category|
//! | `clear_filters`     | yes   | yes          | Reset text and selection together   |
//!
//! There is no invalid state: every combination of text and selection is a legal
//! query. Queries implement [`Criteria`] so they plug directly into
//! [`crate::filter::filter`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::FolioError;
use crate::filter::Criteria;
use crate::model::{Post, Publication, PublicationKind};

/// Query state for the blog listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostQuery {
    search: String,
    /// Selected tags. A post must carry all of them.
    tags: BTreeSet<String>,
}

impl PostQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.set_search_text(text);
        self
    }

    /// Selects each tag (duplicates collapse).
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Flips the selection of `tag`. Returns whether it is selected afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.tags.remove(tag) {
            false
        } else {
            self.tags.insert(tag.to_string());
            true
        }
    }

    pub fn clear_filters(&mut self) {
        *self = Self::default();
    }

    pub fn selected_tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Whether a "Clear filters" action would change anything.
    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty() || !self.tags.is_empty()
    }
}

impl Criteria<Post> for PostQuery {
    fn search_text(&self) -> &str {
        &self.search
    }

    fn selects(&self, post: &Post) -> bool {
        self.tags.iter().all(|tag| post.has_tag(tag))
    }
}

/// The single-select category tab of the publications listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategorySelection {
    #[default]
    All,
    #[serde(untagged)]
    Only(PublicationKind),
}

impl CategorySelection {
    /// Tabs in display order.
    pub fn tabs() -> [CategorySelection; 4] {
        [
            CategorySelection::All,
            CategorySelection::Only(PublicationKind::Journal),
            CategorySelection::Only(PublicationKind::Conference),
            CategorySelection::Only(PublicationKind::Preprint),
        ]
    }

    pub fn admits(&self, kind: PublicationKind) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(selected) => *selected == kind,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategorySelection::All => "All",
            CategorySelection::Only(kind) => kind.label(),
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelection::All => f.write_str("all"),
            CategorySelection::Only(kind) => write!(f, "{}", kind),
        }
    }
}

impl FromStr for CategorySelection {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategorySelection::All);
        }
        s.parse().map(CategorySelection::Only)
    }
}

impl From<PublicationKind> for CategorySelection {
    fn from(kind: PublicationKind) -> Self {
        CategorySelection::Only(kind)
    }
}

/// Query state for the publications listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationQuery {
    search: String,
    category: CategorySelection,
}

impl PublicationQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.set_search_text(text);
        self
    }

    pub fn with_category(mut self, category: impl Into<CategorySelection>) -> Self {
        self.select_category(category);
        self
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn select_category(&mut self, category: impl Into<CategorySelection>) {
        self.category = category.into();
    }

    pub fn clear_filters(&mut self) {
        *self = Self::default();
    }

    pub fn category(&self) -> CategorySelection {
        self.category
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty() || self.category != CategorySelection::All
    }
}

impl Criteria<Publication> for PublicationQuery {
    fn search_text(&self) -> &str {
        &self.search
    }

    fn selects(&self, publication: &Publication) -> bool {
        self.category.admits(publication.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_queries_are_empty() {
        let q = PostQuery::new();
        assert_eq!(q.search_text(), "");
        assert!(q.selected_tags().is_empty());
        assert!(!q.has_active_filters());

        let q = PublicationQuery::new();
        assert_eq!(q.search_text(), "");
        assert_eq!(q.category(), CategorySelection::All);
        assert!(!q.has_active_filters());
    }

    #[test]
    fn test_set_search_text_is_verbatim() {
        let mut q = PostQuery::new();
        q.set_search_text("  Docker ");
        assert_eq!(q.search_text(), "  Docker ");
        q.set_search_text("conda");
        assert_eq!(q.search_text(), "conda");
    }

    #[test]
    fn test_toggle_tag_adds_then_removes() {
        let mut q = PostQuery::new();
        assert!(q.toggle_tag("docker"));
        assert!(q.is_selected("docker"));
        assert!(!q.toggle_tag("docker"));
        assert!(!q.is_selected("docker"));
    }

    #[test]
    fn test_double_toggle_is_net_noop() {
        let mut q = PostQuery::new().with_tags(["conda"]);
        let before = q.clone();
        q.toggle_tag("docker");
        q.toggle_tag("docker");
        assert_eq!(q, before);
        q.toggle_tag("conda");
        q.toggle_tag("conda");
        assert_eq!(q, before);
    }

    #[test]
    fn test_clear_filters_resets_both_fields() {
        let mut q = PostQuery::new().with_search("x").with_tags(["a", "b"]);
        assert!(q.has_active_filters());
        q.clear_filters();
        assert_eq!(q, PostQuery::new());

        let mut q = PublicationQuery::new()
            .with_search("x")
            .with_category(PublicationKind::Preprint);
        q.clear_filters();
        assert_eq!(q, PublicationQuery::new());
    }

    #[test]
    fn test_select_category_replaces() {
        let mut q = PublicationQuery::new();
        q.select_category(PublicationKind::Journal);
        q.select_category(PublicationKind::Preprint);
        assert_eq!(
            q.category(),
            CategorySelection::Only(PublicationKind::Preprint)
        );
        assert!(q.has_active_filters());
        q.select_category(CategorySelection::All);
        assert!(!q.has_active_filters());
    }

    #[test]
    fn test_category_selection_parse() {
        assert_eq!(
            "all".parse::<CategorySelection>().unwrap(),
            CategorySelection::All
        );
        assert_eq!(
            "journal".parse::<CategorySelection>().unwrap(),
            CategorySelection::Only(PublicationKind::Journal)
        );
        assert!("books".parse::<CategorySelection>().is_err());
        for tab in CategorySelection::tabs() {
            assert_eq!(tab.to_string().parse::<CategorySelection>().unwrap(), tab);
        }
    }

    #[test]
    fn test_category_admits() {
        assert!(CategorySelection::All.admits(PublicationKind::Preprint));
        let journal = CategorySelection::Only(PublicationKind::Journal);
        assert!(journal.admits(PublicationKind::Journal));
        assert!(!journal.admits(PublicationKind::Conference));
    }

    #[test]
    fn test_category_selection_serde() {
        assert_eq!(
            serde_json::to_string(&CategorySelection::All).unwrap(),
            "\"all\""
        );
        assert_eq!(
            serde_json::to_string(&CategorySelection::Only(PublicationKind::Journal)).unwrap(),
            "\"journal\""
        );
        let parsed: CategorySelection = serde_json::from_str("\"preprint\"").unwrap();
        assert_eq!(parsed, CategorySelection::Only(PublicationKind::Preprint));
    }
}
