use serde::Serialize;

use crate::error::{FolioError, Result};
use crate::export::{export_bibtex, ExportBlob};
use crate::filter::filter;
use crate::group::{group_by_year, YearGroups};
use crate::model::Publication;
use crate::query::{CategorySelection, PublicationQuery};
use crate::store::RecordStore;
use crate::vocab::CategoryCounts;

/// Everything the publications page renders.
#[derive(Debug, Clone, Serialize)]
pub struct PublicationListing<'a> {
    /// Matching publications in store order; the export operates on these.
    #[serde(skip)]
    pub publications: Vec<&'a Publication>,
    /// The same publications under year headings, newest first.
    pub groups: YearGroups<'a>,
    /// Tab badges, counted over the whole store.
    pub counts: CategoryCounts,
    pub category: CategorySelection,
    pub has_active_filters: bool,
}

impl PublicationListing<'_> {
    pub fn is_empty(&self) -> bool {
        self.publications.is_empty()
    }
}

/// Filters and groups the store.
///
/// Fails only when a matching publication has no year.
pub fn list<'a>(
    store: &'a RecordStore<Publication>,
    query: &PublicationQuery,
) -> Result<PublicationListing<'a>> {
    let publications = filter(store, query);
    let groups = group_by_year(publications.iter().copied())?;
    Ok(PublicationListing {
        publications,
        groups,
        counts: CategoryCounts::tally(store),
        category: query.category(),
        has_active_filters: query.has_active_filters(),
    })
}

/// BibTeX export of whatever the query currently shows.
pub fn export(store: &RecordStore<Publication>, query: &PublicationQuery) -> ExportBlob {
    let blob = export_bibtex(filter(store, query));
    tracing::debug!(entries = blob.entries, "built export blob");
    blob
}

/// The BibTeX entry of one publication, found by exact title or DOI.
pub fn citation<'a>(store: &'a RecordStore<Publication>, key: &str) -> Result<&'a str> {
    let publication = store
        .get(key)
        .or_else(|| store.iter().find(|p| p.doi.as_deref() == Some(key)))
        .ok_or_else(|| FolioError::NotFound(format!("No publication matching '{}'", key)))?;

    publication.bibtex.as_deref().ok_or_else(|| {
        FolioError::NotFound(format!(
            "Publication '{}' has no BibTeX entry",
            publication.title
        ))
    })
}
