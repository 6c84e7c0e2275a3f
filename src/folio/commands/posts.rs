use serde::Serialize;

use crate::error::{FolioError, Result};
use crate::filter::{filter, Criteria};
use crate::model::Post;
use crate::query::PostQuery;
use crate::store::RecordStore;
use crate::vocab::tag_vocabulary;

/// Everything the blog listing page renders.
#[derive(Debug, Clone, Serialize)]
pub struct BlogListing<'a> {
    /// Matching published posts, in store order.
    pub posts: Vec<&'a Post>,
    /// All tags in the store, sorted.
    pub vocabulary: Vec<String>,
    pub selected_tags: Vec<String>,
    pub search: String,
    pub has_active_filters: bool,
}

impl BlogListing<'_> {
    /// No post matched. The page shows its "no matches" state.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

pub fn list<'a>(store: &'a RecordStore<Post>, query: &PostQuery) -> BlogListing<'a> {
    BlogListing {
        posts: filter(store, query),
        vocabulary: tag_vocabulary(store),
        selected_tags: query.selected_tags().iter().cloned().collect(),
        search: query.search_text().to_string(),
        has_active_filters: query.has_active_filters(),
    }
}

/// Sorted tag vocabulary of the store.
pub fn tags(store: &RecordStore<Post>) -> Vec<String> {
    tag_vocabulary(store)
}

/// Looks up a post page by id. Unpublished posts are treated as missing.
pub fn find<'a>(store: &'a RecordStore<Post>, id: &str) -> Result<&'a Post> {
    store
        .get(id)
        .filter(|post| post.published)
        .ok_or_else(|| FolioError::NotFound(format!("No post with id '{}'", id)))
}
