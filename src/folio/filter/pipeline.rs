//! Applies the predicate across a collection.

use super::predicate::matches;
use super::Criteria;
use crate::model::Record;

/// Returns the records that match `criteria`, in input order.
///
/// Accepts anything that yields borrowed records, so a previous result can be fed
/// straight back in (`filter(first.iter().copied(), q)`).
pub fn filter<'a, R, C, I>(records: I, criteria: &C) -> Vec<&'a R>
where
    R: Record + 'a,
    C: Criteria<R> + ?Sized,
    I: IntoIterator<Item = &'a R>,
{
    let matched: Vec<&'a R> = records
        .into_iter()
        .filter(|record| matches(*record, criteria))
        .collect();
    tracing::trace!(
        matched = matched.len(),
        search = criteria.search_text(),
        "filtered records"
    );
    matched
}

/// Number of records that match `criteria`.
pub fn count<'a, R, C, I>(records: I, criteria: &C) -> usize
where
    R: Record + 'a,
    C: Criteria<R> + ?Sized,
    I: IntoIterator<Item = &'a R>,
{
    records
        .into_iter()
        .filter(|record| matches(*record, criteria))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Post, Publication, PublicationKind};
    use crate::query::{CategorySelection, PostQuery, PublicationQuery};
    use crate::store::fixtures::{sample_posts, scenario_publications};

    fn ids<'a>(posts: &[&'a Post]) -> Vec<&'a str> {
        posts.iter().map(|p| p.id.as_str()).collect()
    }

    fn titles<'a>(pubs: &[&'a Publication]) -> Vec<&'a str> {
        pubs.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn empty_query_returns_published_posts_in_order() {
        let posts = sample_posts();
        let result = filter(&posts, &PostQuery::new());
        assert_eq!(
            ids(&result),
            vec!["nextflow-modules", "conda-hell", "docker-tools", "variant-calling"]
        );
    }

    #[test]
    fn unpublished_post_excluded_with_empty_query() {
        let posts = sample_posts();
        let result = filter(&posts, &PostQuery::new());
        assert!(result.iter().all(|p| p.id != "draft-notes"));
    }

    #[test]
    fn preserves_store_order() {
        let posts = sample_posts();
        let result = filter(&posts, &PostQuery::new().with_tags(["reproducibility"]));
        assert_eq!(ids(&result), vec!["nextflow-modules", "docker-tools"]);
    }

    #[test]
    fn idempotent() {
        let posts = sample_posts();
        let query = PostQuery::new().with_search("o");
        let once = filter(&posts, &query);
        let twice = filter(once.iter().copied(), &query);
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_tag_yields_nothing() {
        let posts = sample_posts();
        let result = filter(&posts, &PostQuery::new().with_tags(["haskell"]));
        assert!(result.is_empty());
    }

    #[test]
    fn empty_store_yields_nothing() {
        let posts: Vec<Post> = Vec::new();
        assert!(filter(&posts, &PostQuery::new().with_search("x")).is_empty());
        assert!(filter(&posts, &PostQuery::new()).is_empty());
    }

    #[test]
    fn publication_scenario_by_category() {
        let pubs = scenario_publications();
        let journal = PublicationQuery::new()
            .with_category(CategorySelection::Only(PublicationKind::Journal));
        assert_eq!(titles(&filter(&pubs, &journal)), vec!["A"]);

        let all = PublicationQuery::new().with_category(CategorySelection::All);
        assert_eq!(titles(&filter(&pubs, &all)), vec!["A", "B", "C"]);
    }

    #[test]
    fn count_agrees_with_filter() {
        let posts = sample_posts();
        let query = PostQuery::new().with_search("docker");
        assert_eq!(count(&posts, &query), filter(&posts, &query).len());
    }
}
